// Host-side tests for the click ring buffer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod field_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod clicks {
        include!("../src/core/clicks.rs");
    }
}

use field_core::clicks::{ClickRegister, CLICK_SENTINEL};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn fresh_register_is_all_sentinel() {
    let reg = ClickRegister::new();
    assert_eq!(reg.live_count(), 0);
    for slot in reg.slots() {
        assert!(slot[0] < 0.0, "unused slot should carry the sentinel");
    }
    assert_eq!(reg.entry(0).0, CLICK_SENTINEL);
}

#[test]
fn push_records_position_and_time() {
    let mut reg = ClickRegister::new();
    reg.push(Vec2::new(120.0, 48.0), 3.25);
    assert_eq!(reg.live_count(), 1);
    let (pos, time) = reg.entry(0);
    assert_eq!(pos, Vec2::new(120.0, 48.0));
    assert_eq!(time, 3.25);
    assert_eq!(reg.slots()[0], [120.0, 48.0, 3.25, 0.0]);
}

#[test]
fn overflow_overwrites_oldest_slots() {
    let mut reg = ClickRegister::new();
    let mut rng = StdRng::seed_from_u64(7);
    let n = reg.capacity() + 3;
    let pushed: Vec<(Vec2, f32)> = (0..n)
        .map(|_| {
            (
                Vec2::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0)),
                rng.gen_range(0.0..100.0),
            )
        })
        .collect();
    for &(pos, t) in &pushed {
        reg.push(pos, t);
    }
    assert_eq!(reg.live_count(), reg.capacity());
    assert_eq!(reg.cursor(), 3);
    // Slots 0..3 now hold the newest clicks, the rest keep their first round.
    for i in 0..3 {
        assert_eq!(reg.entry(i), pushed[reg.capacity() + i]);
    }
    for i in 3..reg.capacity() {
        assert_eq!(reg.entry(i), pushed[i]);
    }
}

#[test]
fn coincident_rings_never_overbrighten() {
    // The same click registered twice (both pointerdown targets fire for a
    // click on the canvas) must render as a single ring under max-combine.
    let one = ClickRegister::ring_profile(0.15, 0.4, 0.3, 0.1, 1.0);
    assert!(one > 0.0);
    assert_eq!(one.max(one), one);

    // A weaker coincident ring never raises the feed above the stronger one.
    let weak = ClickRegister::ring_profile(0.15, 0.4, 0.3, 0.1, 0.4);
    assert_eq!(one.max(weak), one);
}

#[test]
fn rings_fade_below_visibility_past_the_damped_lifetime() {
    let speed = 0.3;
    let thickness = 0.1;
    // On the expanding band (r = speed * t) the combined damping makes the
    // peak negligible after a few seconds.
    for t in [2.0_f32, 5.0, 10.0] {
        let peak = ClickRegister::ring_profile(speed * t, t, speed, thickness, 1.0);
        assert!(peak < 1e-3, "t={t} peak={peak}");
    }
    // Far from the band the ring contributes nothing even when fresh.
    assert!(ClickRegister::ring_profile(2.0, 0.1, speed, thickness, 1.0) < 1e-6);
    // Sanity: at the click origin at time zero the ring is at full strength.
    assert_eq!(ClickRegister::ring_profile(0.0, 0.0, speed, thickness, 1.0), 1.0);
}

#[test]
fn cursor_wraps_to_zero_at_capacity() {
    let mut reg = ClickRegister::new();
    for i in 0..reg.capacity() {
        reg.push(Vec2::new(i as f32, 0.0), i as f32);
    }
    assert_eq!(reg.cursor(), 0);
    assert_eq!(reg.live_count(), reg.capacity());
}
