// Host-side tests for the emotion palette and color interpolation.

use aura_core::color::{self, ColorInterpolator};
use aura_core::palette::{resolve, resolve_label, ColorDescriptor};
use aura_core::Emotion;

#[test]
fn unknown_labels_resolve_to_neutral() {
    let neutral = resolve(Emotion::Neutral);
    for label in [None, Some(""), Some("furious"), Some("HAPPY"), Some(" calm"), Some("null")] {
        assert_eq!(resolve_label(label), neutral, "label {label:?}");
    }
}

#[test]
fn known_labels_resolve_to_their_entries() {
    assert_eq!(resolve_label(Some("happy")), ColorDescriptor::new(50.0, 90.0, 95.0, 40.0));
    assert_eq!(resolve_label(Some("excited")), ColorDescriptor::new(320.0, 95.0, 100.0, 280.0));
    assert_eq!(resolve_label(Some("sad")), ColorDescriptor::new(210.0, 70.0, 55.0, 230.0));
    assert_eq!(resolve_label(Some("angry")), ColorDescriptor::new(0.0, 95.0, 90.0, 15.0));
    assert_eq!(resolve_label(Some("calm")), ColorDescriptor::new(180.0, 60.0, 75.0, 200.0));
    assert_eq!(resolve_label(Some("neutral")), ColorDescriptor::new(140.0, 35.0, 55.0, 160.0));
}

#[test]
fn palette_values_stay_in_range() {
    for e in Emotion::ALL {
        let c = resolve(e);
        assert!((0.0..360.0).contains(&c.hue));
        assert!((0.0..360.0).contains(&c.secondary_hue));
        assert!((0.0..=100.0).contains(&c.saturation));
        assert!((0.0..=100.0).contains(&c.brightness));
    }
}

#[test]
fn interpolator_converges_without_overshoot() {
    let starts = [
        ColorDescriptor::new(0.0, 0.0, 0.0, 0.0),
        ColorDescriptor::new(140.0, 30.0, 50.0, 160.0),
        ColorDescriptor::new(359.0, 100.0, 100.0, 10.0),
    ];
    for start in starts {
        for e in Emotion::ALL {
            let target = resolve(e);
            let mut interp = ColorInterpolator::starting_at(start, 0.03);
            let below = [
                start.hue <= target.hue,
                start.saturation <= target.saturation,
                start.brightness <= target.brightness,
            ];
            for _ in 0..1000 {
                let c = interp.step(&target);
                let channels = [
                    (c.hue, target.hue),
                    (c.saturation, target.saturation),
                    (c.brightness, target.brightness),
                ];
                for (i, (value, goal)) in channels.into_iter().enumerate() {
                    if below[i] {
                        assert!(value <= goal, "overshoot above {goal}: {value}");
                    } else {
                        assert!(value >= goal, "overshoot below {goal}: {value}");
                    }
                }
            }
            let c = interp.current();
            assert!((c.hue - target.hue).abs() < 1e-3);
            assert!((c.saturation - target.saturation).abs() < 1e-3);
            assert!((c.brightness - target.brightness).abs() < 1e-3);
        }
    }
}

#[test]
fn single_step_closes_three_percent_of_the_gap() {
    let current = ColorDescriptor::new(100.0, 20.0, 80.0, 0.0);
    let target = ColorDescriptor::new(200.0, 60.0, 40.0, 90.0);
    let next = color::step(current, &target, 0.03);
    assert!((next.hue - 103.0).abs() < 1e-4);
    assert!((next.saturation - 21.2).abs() < 1e-4);
    assert!((next.brightness - 78.8).abs() < 1e-4);
    // accent hue follows the target directly
    assert_eq!(next.secondary_hue, 90.0);
}

#[test]
fn default_interpolator_starts_from_muted_green() {
    let c = ColorInterpolator::default().current();
    assert_eq!((c.hue, c.saturation, c.brightness), (140.0, 30.0, 50.0));
}
