//! The fixed particle set: noise-driven motion, toroidal wrap and glow rendering.

use crate::color::Hsba;
use crate::constants::*;
use crate::emotion::Emotion;
use crate::motion::{heading_and_speed, EmotionMotionParams};
use crate::noise::NoiseField;
use crate::palette::ColorDescriptor;
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Core diameter in pixels; glow layers are multiples of it.
    pub base_size: f32,
    pub base_speed_factor: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, base_size: f32, base_speed_factor: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            base_size,
            base_speed_factor,
        }
    }

    fn random(extent: Vec2, rng: &mut impl Rng) -> Self {
        Self::new(
            rng.gen_range(0.0..extent.x),
            rng.gen_range(0.0..extent.y),
            rng.gen_range(PARTICLE_SIZE_RANGE.0..PARTICLE_SIZE_RANGE.1),
            rng.gen_range(PARTICLE_SPEED_RANGE.0..PARTICLE_SPEED_RANGE.1),
        )
    }
}

#[inline]
fn map_sentiment(sentiment: f32, range: (f32, f32)) -> f32 {
    let s = sentiment.clamp(0.0, 1.0);
    range.0 + (range.1 - range.0) * s
}

/// Sentiment 0..1 mapped onto 0.3..2.5.
#[inline]
pub fn base_speed(sentiment: f32) -> f32 {
    map_sentiment(sentiment, BASE_SPEED_RANGE)
}

/// Sentiment 0..1 mapped onto 40..100.
#[inline]
pub fn brightness(sentiment: f32) -> f32 {
    map_sentiment(sentiment, BRIGHTNESS_RANGE)
}

/// Sentiment 0..1 mapped onto 30..100.
#[inline]
pub fn saturation(sentiment: f32) -> f32 {
    map_sentiment(sentiment, SATURATION_RANGE)
}

/// Toroidal wrap for one axis: below zero re-enters at `extent`, beyond
/// `extent` re-enters at zero. NaN re-enters at zero.
#[inline]
pub fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else if v < 0.0 {
        extent
    } else if v > extent {
        0.0
    } else {
        v
    }
}

/// Base hue shifted by a small per-index offset, kept in [0, 360).
#[inline]
pub fn particle_hue(base_hue: f32, index: usize) -> f32 {
    let offset = (index % HUE_VARIATION_BUCKETS) as f32 * HUE_VARIATION_STEP;
    (base_hue + offset).rem_euclid(360.0)
}

#[derive(Clone, Debug)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    extent: Vec2,
}

impl ParticleSystem {
    /// Scatter `count` particles uniformly over the canvas.
    pub fn spawn(count: usize, extent: Vec2, rng: &mut impl Rng) -> Self {
        let particles = (0..count).map(|_| Particle::random(extent, rng)).collect();
        Self { particles, extent }
    }

    pub fn from_particles(particles: Vec<Particle>, extent: Vec2) -> Self {
        Self { particles, extent }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    /// Change the wrap bounds. Positions are left alone; anything now outside
    /// wraps on the next advance.
    pub fn set_extent(&mut self, extent: Vec2) {
        self.extent = extent;
    }

    /// Move every particle one frame along the motion field, then wrap.
    pub fn advance(
        &mut self,
        field: &NoiseField,
        sentiment: f32,
        emotion: Emotion,
        time_offset: f64,
    ) {
        let params = EmotionMotionParams::for_emotion(emotion);
        let speed = base_speed(sentiment);
        let extent = self.extent;
        for p in &mut self.particles {
            let (angle, multiplier) =
                heading_and_speed(field, p.pos.x, p.pos.y, time_offset, &params);
            let velocity = Vec2::from_angle(angle) * (speed * p.base_speed_factor * multiplier);
            let next = p.pos + velocity;
            p.pos = Vec2::new(wrap_axis(next.x, extent.x), wrap_axis(next.y, extent.y));
        }
    }

    /// Draw outer glow, middle glow and core for each particle. Returns the
    /// number of particles drawn.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        sentiment: f32,
        color: &ColorDescriptor,
    ) -> usize {
        let bri = brightness(sentiment);
        let sat = saturation(sentiment);
        for (i, p) in self.particles.iter().enumerate() {
            let hue = particle_hue(color.hue, i);
            for (size_mul, sat_mul, bri_mul, alpha) in [GLOW_OUTER, GLOW_MIDDLE, GLOW_CORE] {
                surface.fill_circle(
                    p.pos,
                    p.base_size * size_mul,
                    Hsba::new(hue, sat * sat_mul, bri * bri_mul, alpha),
                );
            }
        }
        self.particles.len()
    }
}
