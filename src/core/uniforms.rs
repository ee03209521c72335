// Per-frame uniform snapshots.
//
// A single pure function assembles the complete uniform block from the
// config, the sequencer state, the click register and the viewport, so no
// call site ever performs a partial write. The Rust structs mirror the WGSL
// uniform blocks field for field; everything is packed into vec4 slots to
// keep the std140-style layout trivially correct.

use super::clicks::ClickRegister;
use super::config::RenderConfig;
use super::constants::{
    AUTO_RIPPLE_FREQUENCY, AUTO_RIPPLE_SPEED, BREATHING_SPEED, MAX_CLICKS, PULSE_SPEED,
    SPIRAL_SPEED, WAVE_FREQUENCY, WAVE_SPEED,
};
use super::sequencer::{AnimationState, EffectTimes};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FieldUniforms {
    /// xy = framebuffer size in device pixels, z = shader time, w = pixel size.
    pub resolution: [f32; 4],
    /// rgb = base color, w unused.
    pub color: [f32; 4],
    /// x = pattern scale, y = density, z = pixel jitter, w = edge fade.
    pub pattern: [f32; 4],
    /// x = shape selector, y = click ripples enabled, zw unused.
    pub shape: [f32; 4],
    /// x = click ripple speed, y = thickness, z = intensity, w unused.
    pub ripple: [f32; 4],
    /// x = amplitude, y = frequency, z = speed, w = local time.
    pub wave: [f32; 4],
    /// x = intensity, y = speed, z = local time, w = enable.
    pub pulse: [f32; 4],
    /// x = amplitude, y = frequency, z = speed, w = local time.
    pub auto_ripple: [f32; 4],
    /// x = intensity, y = speed, z = local time, w = enable.
    pub spiral: [f32; 4],
    /// x = intensity, y = speed, z = local time, w = enable.
    pub breathing: [f32; 4],
    /// x = wave enable, y = auto-ripple enable, zw unused.
    pub toggles: [f32; 4],
    /// xy = click position (device px, y-down), z = click time, w unused.
    /// Sentinel entries have x < 0.
    pub clicks: [[f32; 4]; MAX_CLICKS],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PostUniforms {
    /// x = distortion strength, y = wobble frequency, z = shader time,
    /// w = grain amount.
    pub params: [f32; 4],
    /// xy = framebuffer size, zw unused.
    pub resolution: [f32; 4],
}

fn flag(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Build the complete field uniform block for one frame.
pub fn build_field_uniforms(
    cfg: &RenderConfig,
    anim: &AnimationState,
    clicks: &ClickRegister,
    width: f32,
    height: f32,
    pixel_ratio: f32,
    time: f32,
    effect_times: EffectTimes,
) -> FieldUniforms {
    let v = anim.current();
    let [wave_on, pulse_on, ripple_on, spiral_on, breathing_on] = anim.rounded_enables();
    FieldUniforms {
        resolution: [width, height, time, cfg.pixel_size * pixel_ratio],
        color: [cfg.color[0], cfg.color[1], cfg.color[2], 0.0],
        pattern: [
            cfg.pattern_scale,
            cfg.pattern_density,
            cfg.pixel_jitter,
            cfg.edge_fade,
        ],
        shape: [cfg.variant as u32 as f32, flag(cfg.enable_ripples), 0.0, 0.0],
        ripple: [
            cfg.ripple_speed,
            cfg.ripple_thickness,
            cfg.ripple_intensity,
            0.0,
        ],
        wave: [
            v.wave_amplitude,
            WAVE_FREQUENCY,
            WAVE_SPEED,
            effect_times.wave,
        ],
        pulse: [
            v.pulse_intensity,
            PULSE_SPEED,
            effect_times.pulse,
            flag(pulse_on),
        ],
        auto_ripple: [
            v.ripple_amplitude,
            AUTO_RIPPLE_FREQUENCY,
            AUTO_RIPPLE_SPEED,
            effect_times.ripple,
        ],
        spiral: [
            v.spiral_intensity,
            SPIRAL_SPEED,
            effect_times.spiral,
            flag(spiral_on),
        ],
        breathing: [
            v.breathing_intensity,
            BREATHING_SPEED,
            effect_times.breathing,
            flag(breathing_on),
        ],
        toggles: [flag(wave_on), flag(ripple_on), 0.0, 0.0],
        clicks: clicks.slots(),
    }
}

pub fn build_post_uniforms(cfg: &RenderConfig, width: f32, height: f32, time: f32) -> PostUniforms {
    PostUniforms {
        params: [
            cfg.liquid_strength,
            cfg.liquid_wobble_speed,
            time,
            cfg.noise_amount,
        ],
        resolution: [width, height, 0.0, 0.0],
    }
}
