// Host-side tests for the per-frame uniform snapshot.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod field_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod clicks {
        include!("../src/core/clicks.rs");
    }
    pub mod sequencer {
        include!("../src/core/sequencer.rs");
    }
    pub mod uniforms {
        include!("../src/core/uniforms.rs");
    }
}

use field_core::clicks::ClickRegister;
use field_core::config::{RenderConfig, Shape};
use field_core::constants::{
    AUTO_RIPPLE_FREQUENCY, AUTO_RIPPLE_SPEED, TRANSITION_IN_MS, WAVE_FREQUENCY, WAVE_SPEED,
};
use field_core::sequencer::AnimationState;
use field_core::uniforms::{build_field_uniforms, build_post_uniforms, FieldUniforms, PostUniforms};
use glam::Vec2;

#[test]
fn uniform_blocks_have_vec4_aligned_sizes() {
    // 11 vec4 slots plus ten vec4 click entries.
    assert_eq!(std::mem::size_of::<FieldUniforms>(), 336);
    assert_eq!(std::mem::size_of::<PostUniforms>(), 32);
}

#[test]
fn snapshot_packs_config_and_viewport() {
    let mut cfg = RenderConfig::default();
    cfg.variant = Shape::Circle;
    cfg.pixel_jitter = 0.8;
    let anim = AnimationState::new();
    let clicks = ClickRegister::new();

    let u = build_field_uniforms(
        &cfg,
        &anim,
        &clicks,
        800.0,
        600.0,
        2.0,
        12.5,
        anim.effect_times(0.0),
    );
    assert_eq!(u.resolution, [800.0, 600.0, 12.5, 6.0]); // pixel size scaled by dpr
    assert_eq!(u.color[3], 0.0);
    assert_eq!(u.pattern, [2.0, 1.0, 0.8, 0.5]);
    assert_eq!(u.shape[0], Shape::Circle as u32 as f32);
    assert_eq!(u.shape[1], 1.0);
    assert_eq!(u.ripple[..3], [0.3, 0.1, 1.0]);
    assert_eq!(u.wave[1], WAVE_FREQUENCY);
    assert_eq!(u.wave[2], WAVE_SPEED);
    assert_eq!(u.auto_ripple[1], AUTO_RIPPLE_FREQUENCY);
    assert_eq!(u.auto_ripple[2], AUTO_RIPPLE_SPEED);
    // Idle sequencer: all amplitudes and enables at zero.
    assert_eq!(u.wave[0], 0.0);
    assert_eq!(u.toggles[0], 0.0);
    assert_eq!(u.pulse[3], 0.0);
    for slot in u.clicks {
        assert!(slot[0] < 0.0);
    }
}

#[test]
fn snapshot_reflects_the_active_preset() {
    let cfg = RenderConfig::default();
    let mut anim = AnimationState::new();
    anim.on_timer(0.0);
    anim.sample(TRANSITION_IN_MS);
    let clicks = ClickRegister::new();

    let u = build_field_uniforms(
        &cfg,
        &anim,
        &clicks,
        640.0,
        480.0,
        1.0,
        4.0,
        anim.effect_times(TRANSITION_IN_MS),
    );
    // gentle-waves: wave amplitude up and enabled, everything else off.
    assert_eq!(u.wave[0], 0.35);
    assert_eq!(u.toggles[0], 1.0);
    assert_eq!(u.toggles[1], 0.0);
    assert_eq!(u.pulse[3], 0.0);
    assert_eq!(u.spiral[3], 0.0);
    assert_eq!(u.breathing[3], 0.0);
}

#[test]
fn snapshot_carries_click_entries_in_ring_order() {
    let cfg = RenderConfig::default();
    let anim = AnimationState::new();
    let mut clicks = ClickRegister::new();
    clicks.push(Vec2::new(10.0, 20.0), 1.0);
    clicks.push(Vec2::new(30.0, 40.0), 2.0);

    let u = build_field_uniforms(
        &cfg,
        &anim,
        &clicks,
        640.0,
        480.0,
        1.0,
        3.0,
        anim.effect_times(0.0),
    );
    assert_eq!(u.clicks[0], [10.0, 20.0, 1.0, 0.0]);
    assert_eq!(u.clicks[1], [30.0, 40.0, 2.0, 0.0]);
    assert!(u.clicks[2][0] < 0.0);
}

#[test]
fn ripples_disabled_clears_the_shader_flag() {
    let mut cfg = RenderConfig::default();
    cfg.enable_ripples = false;
    let anim = AnimationState::new();
    let clicks = ClickRegister::new();
    let u = build_field_uniforms(
        &cfg,
        &anim,
        &clicks,
        640.0,
        480.0,
        1.0,
        0.0,
        anim.effect_times(0.0),
    );
    assert_eq!(u.shape[1], 0.0);
}

#[test]
fn clicks_recorded_while_ripples_are_off_survive_reenable() {
    // Registration is unconditional; only the shader flag gates rendering,
    // so turning ripples back on shows rings from recent clicks.
    let mut cfg = RenderConfig::default();
    cfg.enable_ripples = false;
    let anim = AnimationState::new();
    let mut clicks = ClickRegister::new();
    clicks.push(Vec2::new(50.0, 60.0), 2.0);

    let off = build_field_uniforms(
        &cfg,
        &anim,
        &clicks,
        640.0,
        480.0,
        1.0,
        2.5,
        anim.effect_times(0.0),
    );
    assert_eq!(off.shape[1], 0.0);
    assert_eq!(off.clicks[0], [50.0, 60.0, 2.0, 0.0]);

    cfg.enable_ripples = true;
    let on = build_field_uniforms(
        &cfg,
        &anim,
        &clicks,
        640.0,
        480.0,
        1.0,
        2.5,
        anim.effect_times(0.0),
    );
    assert_eq!(on.shape[1], 1.0);
    assert_eq!(on.clicks[0], [50.0, 60.0, 2.0, 0.0]);
}

#[test]
fn post_uniforms_pack_liquid_and_grain_params() {
    let mut cfg = RenderConfig::default();
    cfg.liquid_strength = 0.25;
    cfg.liquid_wobble_speed = 3.0;
    cfg.noise_amount = 0.15;
    let u = build_post_uniforms(&cfg, 1024.0, 768.0, 7.5);
    assert_eq!(u.params, [0.25, 3.0, 7.5, 0.15]);
    assert_eq!(u.resolution, [1024.0, 768.0, 0.0, 0.0]);
}
