use crate::color::Hsba;
use glam::Vec2;

/// Immediate-mode 2D drawing target.
///
/// Anything that can fill the whole surface, fill a circle and stroke a line
/// in HSB(A) color can host the scene. Sizing is owned by the caller and
/// reported to the scene through `Scene::resize`.
pub trait Surface {
    fn background(&mut self, color: Hsba);
    /// `diameter` in pixels, centred on `center`.
    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Hsba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Hsba);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn background(&mut self, color: Hsba) {
        (**self).background(color)
    }
    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Hsba) {
        (**self).fill_circle(center, diameter, color)
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Hsba) {
        (**self).stroke_line(from, to, weight, color)
    }
}
