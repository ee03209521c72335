// Host-side tests for the pointer-trail raster.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod field_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod trail {
        include!("../src/core/trail.rs");
    }
}

use field_core::constants::{TRAIL_MAX_AGE, TRAIL_SIZE};
use field_core::trail::TrailTexture;
use glam::Vec2;

#[test]
fn first_touch_only_seeds_the_register() {
    let mut trail = TrailTexture::new();
    trail.add_touch(Vec2::new(0.5, 0.5));
    assert_eq!(trail.len(), 1);
    assert_eq!(trail.points()[0].force, 0.0);
    assert_eq!(trail.points()[0].vel, Vec2::ZERO);
}

#[test]
fn zero_displacement_is_rejected() {
    let mut trail = TrailTexture::new();
    trail.add_touch(Vec2::new(0.5, 0.5));
    trail.add_touch(Vec2::new(0.5, 0.5));
    assert_eq!(trail.len(), 1);
}

#[test]
fn force_saturates_with_fast_motion() {
    let mut trail = TrailTexture::new();
    trail.add_touch(Vec2::new(0.5, 0.5));
    trail.add_touch(Vec2::new(0.6, 0.5));
    let p = trail.points()[1];
    assert_eq!(p.force, 1.0);
    assert!((p.vel - Vec2::new(1.0, 0.0)).length() < 1e-6);

    // A tiny nudge stays well below saturation.
    trail.add_touch(Vec2::new(0.6005, 0.5));
    assert!(trail.points()[2].force < 0.01);
}

#[test]
fn points_age_one_frame_per_update_and_expire() {
    let mut trail = TrailTexture::new();
    trail.add_touch(Vec2::new(0.3, 0.3));
    for step in 1..=TRAIL_MAX_AGE {
        trail.update();
        assert_eq!(trail.len(), 1, "alive at age {step}");
        assert_eq!(trail.points()[0].age, step);
    }
    trail.update();
    assert!(trail.is_empty(), "point should expire past max age");
}

#[test]
fn update_rasters_moving_points() {
    let mut trail = TrailTexture::new();
    trail.add_touch(Vec2::new(0.4, 0.5));
    trail.add_touch(Vec2::new(0.5, 0.5));
    trail.update();
    assert!(trail.take_dirty());
    assert!(!trail.take_dirty(), "dirty flag is consumed on read");
    assert_eq!(trail.pixels().len(), TRAIL_SIZE * TRAIL_SIZE * 4);
    assert!(
        trail.pixels().iter().any(|&b| b != 0),
        "a forced point must leave marks in the raster"
    );
}

#[test]
fn raster_clears_once_all_points_expire() {
    let mut trail = TrailTexture::new();
    trail.add_touch(Vec2::new(0.4, 0.5));
    trail.add_touch(Vec2::new(0.5, 0.5));
    for _ in 0..=TRAIL_MAX_AGE {
        trail.update();
    }
    assert!(trail.is_empty());
    assert!(trail.pixels().iter().all(|&b| b == 0));
}
