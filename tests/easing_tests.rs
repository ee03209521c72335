// Host-side tests for the easing curves.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod field_core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
}

use field_core::easing::{lerp, Easing};

const ALL: [Easing; 11] = [
    Easing::InOutCubic,
    Easing::InOutQuart,
    Easing::InOutSine,
    Easing::InOutCirc,
    Easing::InOutBack,
    Easing::OutQuad,
    Easing::OutSine,
    Easing::OutExpo,
    Easing::OutBack,
    Easing::OutElastic,
    Easing::OutBounce,
];

#[test]
fn every_curve_hits_its_endpoints() {
    for c in ALL {
        assert!(c.apply(0.0).abs() < 1e-5, "{c:?} should start at 0");
        assert!((c.apply(1.0) - 1.0).abs() < 1e-5, "{c:?} should end at 1");
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    for c in ALL {
        assert_eq!(c.apply(-3.0), c.apply(0.0), "{c:?} below range");
        assert_eq!(c.apply(2.5), c.apply(1.0), "{c:?} above range");
    }
}

#[test]
fn symmetric_curves_pass_through_half() {
    for c in [Easing::InOutCubic, Easing::InOutQuart, Easing::InOutSine, Easing::InOutCirc] {
        assert!((c.apply(0.5) - 0.5).abs() < 1e-5, "{c:?} at midpoint");
    }
}

#[test]
fn monotonic_curves_are_increasing() {
    for c in [
        Easing::InOutCubic,
        Easing::InOutQuart,
        Easing::InOutSine,
        Easing::InOutCirc,
        Easing::OutQuad,
        Easing::OutSine,
        Easing::OutExpo,
    ] {
        let mut prev = c.apply(0.0);
        for i in 1..=100 {
            let v = c.apply(i as f32 / 100.0);
            assert!(v >= prev - 1e-6, "{c:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn elastic_and_back_overshoot() {
    for c in [Easing::OutElastic, Easing::OutBack, Easing::InOutBack] {
        let max = (0..=100)
            .map(|i| c.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(max > 1.0, "{c:?} should overshoot its target");
    }
}

#[test]
fn lerp_basics() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    assert_eq!(lerp(-1.0, 1.0, 0.75), 0.5);
}
