// Host-side tests for neighbour connections and ambient overlays.

mod common;

use aura_core::ambient::{orb_position, overlay};
use aura_core::connections::{connection_alpha, draw_connections};
use aura_core::palette::resolve;
use aura_core::{Emotion, NoiseField, Particle};
use common::{approx, RecordingSurface};
use glam::Vec2;
use rand::prelude::*;

fn at(x: f32, y: f32) -> Particle {
    Particle::new(x, y, 4.0, 1.0)
}

#[test]
fn alpha_is_full_at_zero_and_excluded_at_threshold() {
    assert_eq!(connection_alpha(0.0, 100.0), Some(40.0));
    assert_eq!(connection_alpha(100.0, 100.0), None);
    assert_eq!(connection_alpha(150.0, 100.0), None);
    let mid = connection_alpha(50.0, 100.0).unwrap_or_default();
    assert!(approx(mid, 20.0, 1e-4));
}

#[test]
fn pair_at_threshold_draws_nothing_and_coincident_pair_draws_brightest() {
    let color = resolve(Emotion::Neutral);
    let mut surface = RecordingSurface::new();

    let apart = [at(0.0, 0.0), at(100.0, 0.0)];
    assert_eq!(draw_connections(&mut surface, &apart, Emotion::Neutral, 100.0, &color, 0.5), 0);
    assert!(surface.lines().is_empty());

    let together = [at(10.0, 10.0), at(10.0, 10.0)];
    assert_eq!(draw_connections(&mut surface, &together, Emotion::Neutral, 100.0, &color, 0.5), 1);
    let (_, _, weight, c) = surface.lines()[0];
    assert_eq!(weight, 1.5);
    assert_eq!(c.a, 40.0);
}

#[test]
fn only_the_next_three_particles_are_checked() {
    let color = resolve(Emotion::Neutral);
    let mut surface = RecordingSurface::new();
    let cluster: Vec<Particle> = (0..6).map(|_| at(50.0, 50.0)).collect();
    let drawn = draw_connections(&mut surface, &cluster, Emotion::Neutral, 100.0, &color, 0.5);
    // 3 + 3 + 3 + 2 + 1 + 0, not the 15 of a full pairwise pass
    assert_eq!(drawn, 12);
}

#[test]
fn vivid_emotions_link_in_the_accent_hue() {
    let mut surface = RecordingSurface::new();
    let pair = [at(0.0, 0.0), at(10.0, 0.0)];
    for e in Emotion::ALL {
        surface.clear();
        let color = resolve(e);
        draw_connections(&mut surface, &pair, e, 100.0, &color, 0.5);
        let hue = surface.lines()[0].3.h;
        let expected = if e.is_vivid() { color.secondary_hue } else { color.hue };
        assert_eq!(hue, expected, "{e}");
    }
}

#[test]
fn sparkles_only_for_excited_and_happy() {
    let field = NoiseField::default();
    let extent = Vec2::new(400.0, 300.0);
    let mut rng = StdRng::seed_from_u64(3);
    for e in Emotion::ALL {
        let mut surface = RecordingSurface::new();
        let color = resolve(e);
        let stats = overlay(&mut surface, e, 1.0, extent, &color, &field, &mut rng);
        match e {
            Emotion::Excited | Emotion::Happy => {
                assert_eq!(stats.sparkles, 3);
                for (pos, size, c) in surface.circles() {
                    assert!(pos.x >= 0.0 && pos.x <= extent.x && pos.y >= 0.0 && pos.y <= extent.y);
                    assert!((2.0..5.0).contains(&size));
                    assert!((30.0..60.0).contains(&c.a));
                    assert_eq!(c.h, color.secondary_hue);
                }
            }
            Emotion::Calm => {
                assert_eq!(stats.orbs, 5);
                assert!(surface.circles().iter().all(|c| c.1 == 30.0 && c.2.a == 10.0));
            }
            _ => assert!(surface.calls.is_empty(), "{e} drew an overlay"),
        }
    }
}

#[test]
fn calm_orbs_drift_smoothly() {
    let field = NoiseField::default();
    let extent = Vec2::new(1000.0, 800.0);
    for i in 0..5 {
        let mut prev = orb_position(&field, 0.0, i, extent);
        for frame in 1..500 {
            let pos = orb_position(&field, frame as f64 * 0.004, i, extent);
            assert!(pos.x >= 0.0 && pos.x <= extent.x && pos.y >= 0.0 && pos.y <= extent.y);
            assert!(pos.distance(prev) < 0.05 * extent.x, "orb {i} jumped at frame {frame}");
            prev = pos;
        }
    }
}
