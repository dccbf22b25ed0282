use thiserror::Error;

/// Reasons a scene cannot be set up. Once a scene exists every frame step is
/// infallible.
#[derive(Debug, Error, PartialEq)]
pub enum SetupError {
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
    #[error("scene configured with zero particles")]
    NoParticles,
}
