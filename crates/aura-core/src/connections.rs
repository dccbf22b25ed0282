use crate::color::Hsba;
use crate::constants::{
    CONNECTION_BRIGHTNESS_MUL, CONNECTION_MAX_ALPHA, CONNECTION_SATURATION_MUL, CONNECTION_WEIGHT,
    CONNECTION_WINDOW,
};
use crate::emotion::Emotion;
use crate::palette::ColorDescriptor;
use crate::particles::{brightness, saturation, Particle};
use crate::surface::Surface;

/// Line alpha for a pair `distance` apart: full at 0, zero at the threshold.
/// `None` when the pair is not linked at all.
#[inline]
pub fn connection_alpha(distance: f32, threshold: f32) -> Option<f32> {
    if distance < threshold {
        Some(CONNECTION_MAX_ALPHA * (1.0 - distance / threshold))
    } else {
        None
    }
}

/// Link each particle to whichever of the next few particles (by index) sit
/// within `connection_distance`. Only a small forward window is checked, not
/// every pair. Returns the number of lines drawn.
pub fn draw_connections<S: Surface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    emotion: Emotion,
    connection_distance: f32,
    color: &ColorDescriptor,
    sentiment: f32,
) -> usize {
    let hue = if emotion.is_vivid() {
        color.secondary_hue
    } else {
        color.hue
    };
    let sat = saturation(sentiment) * CONNECTION_SATURATION_MUL;
    let bri = brightness(sentiment) * CONNECTION_BRIGHTNESS_MUL;

    let mut drawn = 0;
    for (i, a) in particles.iter().enumerate() {
        let end = (i + 1 + CONNECTION_WINDOW).min(particles.len());
        for b in &particles[i + 1..end] {
            let d = a.pos.distance(b.pos);
            if let Some(alpha) = connection_alpha(d, connection_distance) {
                let color = Hsba::new(hue, sat, bri, alpha);
                surface.stroke_line(a.pos, b.pos, CONNECTION_WEIGHT, color);
                drawn += 1;
            }
        }
    }
    drawn
}
