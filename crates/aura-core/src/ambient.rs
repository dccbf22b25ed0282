use crate::color::Hsba;
use crate::constants::*;
use crate::emotion::Emotion;
use crate::noise::NoiseField;
use crate::palette::ColorDescriptor;
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// What an [`overlay`] call drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AmbientStats {
    pub sparkles: usize,
    pub orbs: usize,
}

/// Emotion-specific decoration drawn on top of the particles.
///
/// Excited and happy scatter a few random sparkles in the accent hue every
/// frame. Calm floats soft orbs whose positions come from the noise field, so
/// they drift rather than jump. Everything else draws nothing.
pub fn overlay<S: Surface + ?Sized>(
    surface: &mut S,
    emotion: Emotion,
    time_offset: f64,
    extent: Vec2,
    color: &ColorDescriptor,
    field: &NoiseField,
    rng: &mut impl Rng,
) -> AmbientStats {
    let mut stats = AmbientStats::default();
    match emotion {
        Emotion::Excited | Emotion::Happy => {
            for _ in 0..SPARKLES_PER_FRAME {
                let pos = Vec2::new(rng.gen_range(0.0..=extent.x), rng.gen_range(0.0..=extent.y));
                let size = rng.gen_range(SPARKLE_SIZE_RANGE.0..SPARKLE_SIZE_RANGE.1);
                let alpha = rng.gen_range(SPARKLE_ALPHA_RANGE.0..SPARKLE_ALPHA_RANGE.1);
                surface.fill_circle(
                    pos,
                    size,
                    Hsba::new(color.secondary_hue, SPARKLE_SATURATION, SPARKLE_BRIGHTNESS, alpha),
                );
                stats.sparkles += 1;
            }
        }
        Emotion::Calm => {
            for i in 0..ORB_COUNT {
                let pos = orb_position(field, time_offset, i, extent);
                surface.fill_circle(
                    pos,
                    ORB_DIAMETER,
                    Hsba::new(color.hue, ORB_SATURATION, ORB_BRIGHTNESS, ORB_ALPHA),
                );
                stats.orbs += 1;
            }
        }
        _ => {}
    }
    stats
}

/// Centre of calm orb `index` at `time_offset`.
pub fn orb_position(field: &NoiseField, time_offset: f64, index: usize, extent: Vec2) -> Vec2 {
    let t = time_offset + index as f64;
    let x = field.sample(t, 0.0, 0.0) as f32 * extent.x;
    let y = field.sample(t + ORB_Y_NOISE_OFFSET, 0.0, 0.0) as f32 * extent.y;
    Vec2::new(x, y)
}
