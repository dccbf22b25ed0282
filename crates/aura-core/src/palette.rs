use crate::emotion::Emotion;

/// Scene palette state: primary HSB plus an accent hue.
///
/// Hues are degrees in [0, 360); saturation and brightness are 0..=100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorDescriptor {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub secondary_hue: f32,
}

impl ColorDescriptor {
    pub const fn new(hue: f32, saturation: f32, brightness: f32, secondary_hue: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            secondary_hue,
        }
    }
}

const HAPPY: ColorDescriptor = ColorDescriptor::new(50.0, 90.0, 95.0, 40.0); // gold
// hot pink / purple
const EXCITED: ColorDescriptor = ColorDescriptor::new(320.0, 95.0, 100.0, 280.0);
const SAD: ColorDescriptor = ColorDescriptor::new(210.0, 70.0, 55.0, 230.0); // deep blue
const ANGRY: ColorDescriptor = ColorDescriptor::new(0.0, 95.0, 90.0, 15.0); // red / orange
const CALM: ColorDescriptor = ColorDescriptor::new(180.0, 60.0, 75.0, 200.0); // cyan
const NEUTRAL: ColorDescriptor = ColorDescriptor::new(140.0, 35.0, 55.0, 160.0); // muted green

/// Target palette for an emotion.
pub fn resolve(emotion: Emotion) -> ColorDescriptor {
    match emotion {
        Emotion::Happy => HAPPY,
        Emotion::Excited => EXCITED,
        Emotion::Sad => SAD,
        Emotion::Angry => ANGRY,
        Emotion::Calm => CALM,
        Emotion::Neutral => NEUTRAL,
    }
}

/// Resolve straight from a wire label; unknown or missing labels give the
/// neutral palette.
pub fn resolve_label(label: Option<&str>) -> ColorDescriptor {
    resolve(Emotion::from_label(label))
}
