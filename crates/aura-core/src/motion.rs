use crate::constants::HEADING_TURNS;
use crate::emotion::Emotion;
use crate::noise::NoiseField;
use std::f64::consts::TAU;

/// Per-emotion motion tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmotionMotionParams {
    /// Spatial frequency applied to pixel coordinates before sampling noise.
    pub noise_scale: f64,
    pub noise_strength: f32,
    /// Pixel distance under which neighbouring particles are linked.
    pub connection_distance: f32,
}

impl EmotionMotionParams {
    const fn new(noise_scale: f64, noise_strength: f32, connection_distance: f32) -> Self {
        Self {
            noise_scale,
            noise_strength,
            connection_distance,
        }
    }

    pub fn for_emotion(emotion: Emotion) -> Self {
        match emotion {
            Emotion::Angry => ANGRY,
            Emotion::Sad => SAD,
            Emotion::Excited => EXCITED,
            Emotion::Calm => CALM,
            Emotion::Happy => HAPPY,
            Emotion::Neutral => DEFAULT,
        }
    }
}

impl Default for EmotionMotionParams {
    fn default() -> Self {
        DEFAULT
    }
}

pub const DEFAULT: EmotionMotionParams = EmotionMotionParams::new(0.003, 2.0, 100.0);
const ANGRY: EmotionMotionParams = EmotionMotionParams::new(0.005, 3.0, 80.0); // chaotic
const SAD: EmotionMotionParams = EmotionMotionParams::new(0.002, 1.5, 120.0); // slow drift
const EXCITED: EmotionMotionParams = EmotionMotionParams::new(0.006, 3.5, 130.0);
const CALM: EmotionMotionParams = EmotionMotionParams::new(0.0015, 1.2, 150.0); // very smooth
const HAPPY: EmotionMotionParams = EmotionMotionParams::new(0.004, 2.5, 110.0);

/// Heading and speed multiplier for a point in the field.
///
/// The noise value in [0, 1) maps to an angle in [0, 8π): four full turns over
/// the noise range, so small changes in the field swing the heading hard. The
/// speed multiplier is the emotion's noise strength, unscaled.
pub fn heading_and_speed(
    field: &NoiseField,
    x: f32,
    y: f32,
    time_offset: f64,
    params: &EmotionMotionParams,
) -> (f32, f32) {
    let n = field.sample(
        x as f64 * params.noise_scale,
        y as f64 * params.noise_scale,
        time_offset,
    );
    let angle = n * TAU * HEADING_TURNS;
    (angle as f32, params.noise_strength)
}
