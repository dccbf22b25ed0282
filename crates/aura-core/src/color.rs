use crate::constants::{COLOR_SMOOTHING, INITIAL_BRIGHTNESS, INITIAL_HUE, INITIAL_SATURATION};
use crate::emotion::Emotion;
use crate::palette::{self, ColorDescriptor};

/// Draw color in the HSB(A) model used by every surface call:
/// hue 0..360, saturation/brightness/alpha 0..=100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsba {
    pub h: f32,
    pub s: f32,
    pub b: f32,
    pub a: f32,
}

impl Hsba {
    pub const fn new(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self { h, s, b, a }
    }

    pub const fn opaque(h: f32, s: f32, b: f32) -> Self {
        Self::new(h, s, b, 100.0)
    }

    /// Convert to 8-bit RGB and a unit alpha, for surfaces without an HSB mode.
    pub fn to_rgba(self) -> ([u8; 3], f32) {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.b / 100.0).clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        let to_u8 = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        ([to_u8(r), to_u8(g), to_u8(b)], (self.a / 100.0).clamp(0.0, 1.0))
    }
}

/// Exponential approach of the scene color toward the palette target.
///
/// Each step closes a fixed fraction of the remaining gap, so the rate is tied
/// to the frame rate rather than wall time.
#[derive(Clone, Debug)]
pub struct ColorInterpolator {
    current: ColorDescriptor,
    k: f32,
}

impl Default for ColorInterpolator {
    fn default() -> Self {
        Self::new(COLOR_SMOOTHING)
    }
}

impl ColorInterpolator {
    pub fn new(k: f32) -> Self {
        let accent = palette::resolve(Emotion::Neutral).secondary_hue;
        Self::starting_at(
            ColorDescriptor::new(INITIAL_HUE, INITIAL_SATURATION, INITIAL_BRIGHTNESS, accent),
            k,
        )
    }

    pub fn starting_at(current: ColorDescriptor, k: f32) -> Self {
        Self {
            current,
            k: k.clamp(0.0, 1.0),
        }
    }

    pub fn current(&self) -> ColorDescriptor {
        self.current
    }

    /// Advance one frame toward `target`.
    ///
    /// Hue is interpolated linearly, not around the color wheel. The accent
    /// hue is taken from the target as-is.
    pub fn step(&mut self, target: &ColorDescriptor) -> ColorDescriptor {
        self.current = step(self.current, target, self.k);
        self.current
    }
}

/// Pure form of [`ColorInterpolator::step`].
#[inline]
pub fn step(current: ColorDescriptor, target: &ColorDescriptor, k: f32) -> ColorDescriptor {
    ColorDescriptor {
        hue: current.hue + (target.hue - current.hue) * k,
        saturation: current.saturation + (target.saturation - current.saturation) * k,
        brightness: current.brightness + (target.brightness - current.brightness) * k,
        secondary_hue: target.secondary_hue,
    }
}
