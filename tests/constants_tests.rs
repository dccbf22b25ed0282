// Host-side sanity checks for tuning constants and their relationships.

use aura_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn session_constants_match_reference_behavior() {
    assert_eq!(PARTICLE_COUNT, 60);
    assert_eq!(CONNECTION_WINDOW, 3);
    assert_eq!(SPARKLES_PER_FRAME, 3);
    assert_eq!(ORB_COUNT, 5);
    assert!((TIME_STEP - 0.004).abs() < 1e-12);
    assert!((COLOR_SMOOTHING - 0.03).abs() < 1e-7);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    for (lo, hi) in [
        PARTICLE_SIZE_RANGE,
        PARTICLE_SPEED_RANGE,
        BASE_SPEED_RANGE,
        BRIGHTNESS_RANGE,
        SATURATION_RANGE,
        SPARKLE_SIZE_RANGE,
        SPARKLE_ALPHA_RANGE,
    ] {
        assert!(lo < hi, "{lo} !< {hi}");
        assert!(lo >= 0.0);
    }
    // HSB channels top out at 100
    assert!(BRIGHTNESS_RANGE.1 <= 100.0 && SATURATION_RANGE.1 <= 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_layers_shrink_and_brighten_toward_the_core() {
    let layers = [GLOW_OUTER, GLOW_MIDDLE, GLOW_CORE];
    for w in layers.windows(2) {
        assert!(w[0].0 > w[1].0, "diameter multipliers must shrink");
        assert!(w[0].3 < w[1].3, "opacity must grow");
    }
    assert_eq!(GLOW_CORE.0, 1.0);
    assert!(GLOW_CORE.3 <= 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_and_alpha_limits_are_sane() {
    assert!(COLOR_SMOOTHING > 0.0 && COLOR_SMOOTHING < 1.0);
    assert!(CONNECTION_MAX_ALPHA > 0.0 && CONNECTION_MAX_ALPHA <= 100.0);
    assert!(ANGRY_PULSE_DEPTH * 2.0 <= 100.0);
    assert!(NOISE_FALLOFF > 0.0 && NOISE_FALLOFF < 1.0);
    assert!(NOISE_OCTAVES >= 1);
}
