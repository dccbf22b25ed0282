// Shared visual tuning constants for the aura scene.

// Session setup
pub const PARTICLE_COUNT: usize = 60;
pub const PARTICLE_SIZE_RANGE: (f32, f32) = (2.0, 10.0); // core circle diameter, px
pub const PARTICLE_SPEED_RANGE: (f32, f32) = (0.5, 1.5); // per-particle speed factor

// Time and smoothing
pub const TIME_STEP: f64 = 0.004; // noise time-axis advance per frame
pub const COLOR_SMOOTHING: f32 = 0.03; // fraction of the remaining gap closed per frame

// Starting color before the first palette target is reached
pub const INITIAL_HUE: f32 = 140.0;
pub const INITIAL_SATURATION: f32 = 30.0;
pub const INITIAL_BRIGHTNESS: f32 = 50.0;

// Sentiment mapping endpoints (sentiment 0 -> first, 1 -> second)
pub const BASE_SPEED_RANGE: (f32, f32) = (0.3, 2.5);
pub const BRIGHTNESS_RANGE: (f32, f32) = (40.0, 100.0);
pub const SATURATION_RANGE: (f32, f32) = (30.0, 100.0);
pub const DEFAULT_SENTIMENT: f32 = 0.5;

// Motion field
pub const HEADING_TURNS: f64 = 4.0; // full rotations across the noise range
pub const NOISE_OCTAVES: u32 = 4;
pub const NOISE_FALLOFF: f64 = 0.5;

// Particle glow layers: (diameter multiplier, saturation mul, brightness mul, alpha)
pub const GLOW_OUTER: (f32, f32, f32, f32) = (5.0, 0.5, 0.7, 15.0);
pub const GLOW_MIDDLE: (f32, f32, f32, f32) = (2.5, 0.7, 0.85, 30.0);
pub const GLOW_CORE: (f32, f32, f32, f32) = (1.0, 1.0, 1.0, 85.0);
pub const HUE_VARIATION_STEP: f32 = 3.0; // degrees per index bucket
pub const HUE_VARIATION_BUCKETS: usize = 20;

// Connections
pub const CONNECTION_WINDOW: usize = 3; // neighbours examined after each particle
pub const CONNECTION_MAX_ALPHA: f32 = 40.0;
pub const CONNECTION_WEIGHT: f32 = 1.5; // px
pub const CONNECTION_SATURATION_MUL: f32 = 0.8;
pub const CONNECTION_BRIGHTNESS_MUL: f32 = 0.9;

// Ambient effects
pub const SPARKLES_PER_FRAME: usize = 3;
pub const SPARKLE_SIZE_RANGE: (f32, f32) = (2.0, 5.0);
pub const SPARKLE_ALPHA_RANGE: (f32, f32) = (30.0, 60.0);
pub const SPARKLE_SATURATION: f32 = 90.0;
pub const SPARKLE_BRIGHTNESS: f32 = 100.0;
pub const ORB_COUNT: usize = 5;
pub const ORB_DIAMETER: f32 = 30.0;
pub const ORB_Y_NOISE_OFFSET: f64 = 100.0; // decorrelates the y axis from x
pub const ORB_SATURATION: f32 = 40.0;
pub const ORB_BRIGHTNESS: f32 = 80.0;
pub const ORB_ALPHA: f32 = 10.0;

// Background
pub const ANGRY_PULSE_RATE: f64 = 3.0; // radians of pulse per unit of time offset
pub const ANGRY_PULSE_DEPTH: f32 = 10.0;
