// Shared helpers for host-side tests: a surface that records every draw call.

#![allow(dead_code)]

use aura_core::{Hsba, Surface};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Background(Hsba),
    Circle { center: Vec2, diameter: f32, color: Hsba },
    Line { from: Vec2, to: Vec2, weight: f32, color: Hsba },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn circles(&self) -> Vec<(Vec2, f32, Hsba)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                DrawCall::Circle { center, diameter, color } => Some((center, diameter, color)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2, f32, Hsba)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                DrawCall::Line { from, to, weight, color } => Some((from, to, weight, color)),
                _ => None,
            })
            .collect()
    }

    pub fn backgrounds(&self) -> Vec<Hsba> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                DrawCall::Background(color) => Some(color),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn background(&mut self, color: Hsba) {
        self.calls.push(DrawCall::Background(color));
    }

    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Hsba) {
        self.calls.push(DrawCall::Circle { center, diameter, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Hsba) {
        self.calls.push(DrawCall::Line { from, to, weight, color });
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
