// Host-side tests for the render configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod field_core {
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use field_core::config::{parse_hex_color, RenderConfig, Shape, DEFAULT_COLOR};

#[test]
fn defaults_match_documented_values() {
    let cfg = RenderConfig::default();
    assert_eq!(cfg.variant, Shape::Square);
    assert_eq!(cfg.pixel_size, 3.0);
    assert_eq!(cfg.color, DEFAULT_COLOR);
    assert!(cfg.antialias);
    assert_eq!(cfg.pattern_scale, 2.0);
    assert_eq!(cfg.pattern_density, 1.0);
    assert!(cfg.enable_ripples);
    assert_eq!(cfg.ripple_speed, 0.3);
    assert_eq!(cfg.ripple_thickness, 0.1);
    assert!(!cfg.liquid);
    assert_eq!(cfg.liquid_strength, 0.1);
    assert_eq!(cfg.liquid_radius, 1.0);
    assert_eq!(cfg.liquid_wobble_speed, 4.5);
    assert!(cfg.auto_pause_offscreen);
    assert_eq!(cfg.speed, 0.5);
    assert!(cfg.transparent);
    assert_eq!(cfg.edge_fade, 0.5);
    assert_eq!(cfg.noise_amount, 0.0);
}

#[test]
fn only_session_keys_force_a_reinit() {
    let base = RenderConfig::default();

    // Every live field can change without a rebuild.
    let mut live = base.clone();
    live.variant = Shape::Diamond;
    live.pixel_size = 6.0;
    live.color = [1.0, 0.0, 0.5];
    live.pattern_scale = 3.5;
    live.pattern_density = 0.2;
    live.pixel_jitter = 1.0;
    live.enable_ripples = false;
    live.ripple_speed = 0.9;
    live.ripple_thickness = 0.25;
    live.ripple_intensity = 2.0;
    live.liquid_strength = 0.4;
    live.liquid_radius = 2.0;
    live.liquid_wobble_speed = 1.0;
    live.auto_pause_offscreen = false;
    live.speed = 2.0;
    live.transparent = false;
    live.edge_fade = 0.0;
    assert!(!live.needs_reinit(&base));

    let mut aa = base.clone();
    aa.antialias = false;
    assert!(aa.needs_reinit(&base));

    let mut liquid = base.clone();
    liquid.liquid = true;
    assert!(liquid.needs_reinit(&base));

    let mut noise = base.clone();
    noise.noise_amount = 0.2;
    assert!(noise.needs_reinit(&base));
}

#[test]
fn transparency_drives_the_frame_clear_color() {
    // `transparent` is a live field: flipping it never rebuilds the session,
    // it changes the clear color of the next frame instead.
    let mut cfg = RenderConfig::default();
    assert_eq!(cfg.clear_color(), [0.0, 0.0, 0.0, 0.0]);
    cfg.transparent = false;
    assert_eq!(cfg.clear_color(), [0.0, 0.0, 0.0, 1.0]);
    assert!(!cfg.needs_reinit(&RenderConfig::default()));
}

#[test]
fn hex_color_parsing() {
    let [r, g, b] = parse_hex_color("#22c55e").expect("six digit form");
    assert!((r - DEFAULT_COLOR[0]).abs() < 1e-6);
    assert!((g - DEFAULT_COLOR[1]).abs() < 1e-6);
    assert!((b - DEFAULT_COLOR[2]).abs() < 1e-6);

    assert_eq!(parse_hex_color("#fff"), Some([1.0, 1.0, 1.0]));
    assert_eq!(parse_hex_color("000000"), Some([0.0, 0.0, 0.0]));
    assert_eq!(parse_hex_color("#12345"), None);
    assert_eq!(parse_hex_color("#gggggg"), None);
    assert_eq!(parse_hex_color(""), None);
}

#[test]
fn shape_names_round_trip() {
    for (name, shape) in [
        ("square", Shape::Square),
        ("circle", Shape::Circle),
        ("triangle", Shape::Triangle),
        ("diamond", Shape::Diamond),
    ] {
        assert_eq!(Shape::from_name(name), Some(shape));
    }
    assert_eq!(Shape::from_name("hexagon"), None);
    assert_eq!(Shape::Triangle as u32, 2);
}
