//! Emotion-responsive particle field.
//!
//! The engine is platform-free: it draws through the [`Surface`] trait and
//! reads its input from a [`SceneStateHandle`] written by whatever delivers
//! sentiment updates.

pub mod ambient;
pub mod color;
pub mod connections;
pub mod constants;
pub mod emotion;
pub mod error;
pub mod hud;
pub mod motion;
pub mod noise;
pub mod palette;
pub mod particles;
pub mod scene;
pub mod state;
pub mod surface;

pub use color::{ColorInterpolator, Hsba};
pub use emotion::Emotion;
pub use error::SetupError;
pub use motion::EmotionMotionParams;
pub use noise::NoiseField;
pub use palette::ColorDescriptor;
pub use particles::{Particle, ParticleSystem};
pub use scene::{FrameStats, Scene, SceneConfig};
pub use state::{SceneState, SceneStateHandle, StateUpdate};
pub use surface::Surface;
