//! Per-frame orchestration of the aura scene.
//!
//! A frame runs, in order: time advance, color smoothing, background,
//! particle motion and glow, neighbour connections, ambient overlay. The scene
//! reads the shared state once per frame and never writes it.

use crate::ambient::{self, AmbientStats};
use crate::color::{ColorInterpolator, Hsba};
use crate::connections::draw_connections;
use crate::constants::*;
use crate::emotion::Emotion;
use crate::error::SetupError;
use crate::motion::EmotionMotionParams;
use crate::noise::NoiseField;
use crate::palette::{self, ColorDescriptor};
use crate::particles::ParticleSystem;
use crate::state::{normalize_sentiment, SceneState};
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub time_step: f64,
    pub color_smoothing: f32,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            time_step: TIME_STEP,
            color_smoothing: COLOR_SMOOTHING,
            seed: 42,
        }
    }
}

/// Counts of what one frame drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub connections: usize,
    pub sparkles: usize,
    pub orbs: usize,
}

pub struct Scene {
    particles: ParticleSystem,
    color: ColorInterpolator,
    field: NoiseField,
    time_offset: f64,
    time_step: f64,
    rng: StdRng,
}

impl Scene {
    pub fn new(width: f32, height: f32, config: SceneConfig) -> Result<Self, SetupError> {
        let extent = checked_extent(width, height)?;
        if config.particle_count == 0 {
            return Err(SetupError::NoParticles);
        }
        let mut rng = StdRng::seed_from_u64(config.seed);
        let particles = ParticleSystem::spawn(config.particle_count, extent, &mut rng);
        log::info!(
            "[scene] {} particles on {:.0}x{:.0} (seed {})",
            particles.len(),
            extent.x,
            extent.y,
            config.seed
        );
        Ok(Self {
            particles,
            color: ColorInterpolator::new(config.color_smoothing),
            field: NoiseField::default(),
            time_offset: 0.0,
            time_step: config.time_step,
            rng,
        })
    }

    /// Swap in a prepared particle set (keeps its extent).
    pub fn with_particles(mut self, particles: ParticleSystem) -> Self {
        self.particles = particles;
        self
    }

    /// Track a new canvas size. Particles and color carry over unchanged;
    /// degenerate sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        match checked_extent(width, height) {
            Ok(extent) => {
                self.particles.set_extent(extent);
                log::info!("[scene] resized to {:.0}x{:.0}", extent.x, extent.y);
            }
            Err(e) => log::warn!("[scene] ignoring resize: {e}"),
        }
    }

    pub fn extent(&self) -> Vec2 {
        self.particles.extent()
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn current_color(&self) -> ColorDescriptor {
        self.color.current()
    }

    pub fn time_offset(&self) -> f64 {
        self.time_offset
    }

    /// Render one frame of `state` onto `surface`.
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        state: &SceneState,
    ) -> FrameStats {
        let emotion = state.emotion;
        let sentiment = normalize_sentiment(state.sentiment);
        let params = EmotionMotionParams::for_emotion(emotion);

        self.time_offset += self.time_step;
        let target = palette::resolve(emotion);
        let color = self.color.step(&target);

        surface.background(background_color(emotion, &color, self.time_offset));

        self.particles.advance(&self.field, sentiment, emotion, self.time_offset);
        let particles = self.particles.draw(surface, sentiment, &color);

        let connections = draw_connections(
            surface,
            self.particles.particles(),
            emotion,
            params.connection_distance,
            &color,
            sentiment,
        );

        let AmbientStats { sparkles, orbs } = ambient::overlay(
            surface,
            emotion,
            self.time_offset,
            self.particles.extent(),
            &color,
            &self.field,
            &mut self.rng,
        );

        FrameStats {
            particles,
            connections,
            sparkles,
            orbs,
        }
    }
}

/// Background fill for the frame; darker variants of the current hue, with a
/// slow brightness pulse when angry.
pub fn background_color(emotion: Emotion, color: &ColorDescriptor, time_offset: f64) -> Hsba {
    match emotion {
        Emotion::Angry => {
            let pulse = ((time_offset * ANGRY_PULSE_RATE).sin() as f32 + 1.0) * ANGRY_PULSE_DEPTH;
            Hsba::opaque(color.hue, color.saturation * 0.6, pulse)
        }
        Emotion::Sad => Hsba::opaque(color.hue, color.saturation * 0.5, 12.0),
        Emotion::Excited => Hsba::opaque(color.hue, color.saturation * 0.4, 20.0),
        _ => Hsba::opaque(color.hue, color.saturation * 0.3, 15.0),
    }
}

fn checked_extent(width: f32, height: f32) -> Result<Vec2, SetupError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(Vec2::new(width, height))
    } else {
        Err(SetupError::InvalidDimensions { width, height })
    }
}
