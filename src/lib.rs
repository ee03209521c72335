#![cfg(target_arch = "wasm32")]

//! Procedural pixel-art background renderer.
//!
//! [`PixelField`] mounts a WebGPU canvas into a host container and animates a
//! dithered noise field with pointer-driven ripples, an optional fluid
//! distortion fed by the pointer trail, and a rotating set of mood presets.
//! The handle is owned by the host page; dropping it does NOT stop the
//! animation, call [`PixelField::destroy`] instead.

pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use crate::core::{
    parse_hex_color, AnimationState, ClickRegister, RenderConfig, Shape, TrailTexture,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pixelfield-web loaded");
    Ok(())
}

/// Everything owned by one GPU session. Dropping it cancels the frame loop
/// and sequencer timer, unhooks listeners and observers, and removes the
/// canvas from the DOM.
struct SessionHandles {
    cancelled: Rc<Cell<bool>>,
    canvas: web::HtmlCanvasElement,
    _listeners: Vec<events::ListenerGuard>,
    _resize: Option<events::ResizeGuard>,
    _visibility: Option<events::VisibilityGuard>,
}

impl Drop for SessionHandles {
    fn drop(&mut self) {
        self.cancelled.set(true);
        self.canvas.remove();
    }
}

struct Mount {
    container: web::HtmlElement,
    config: Rc<RefCell<RenderConfig>>,
    handles: Option<SessionHandles>,
    /// Bumped on every rebuild/destroy; an async session build that comes
    /// back under a stale generation discards itself.
    generation: u32,
    destroyed: bool,
}

/// Handle exported to the host page. One instance per mounted background.
#[wasm_bindgen]
pub struct PixelField {
    inner: Rc<RefCell<Mount>>,
}

#[wasm_bindgen]
impl PixelField {
    /// Mount into the element with the given id and start rendering as soon
    /// as the GPU is ready. If WebGPU is unavailable the mount stays inert
    /// and the page simply shows no background.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str) -> Result<PixelField, JsValue> {
        let container =
            dom::container_by_id(container_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let inner = Rc::new(RefCell::new(Mount {
            container,
            config: Rc::new(RefCell::new(RenderConfig::default())),
            handles: None,
            generation: 0,
            destroyed: false,
        }));
        spawn_local(build_session(inner.clone()));
        Ok(PixelField { inner })
    }

    // ---- live parameters, applied on the next frame ----

    pub fn set_variant(&self, name: &str) {
        if let Some(shape) = Shape::from_name(name) {
            self.with_config(|c| c.variant = shape);
        } else {
            log::warn!("unknown variant {name:?}; keeping current shape");
        }
    }

    pub fn set_pixel_size(&self, px: f32) {
        self.with_config(|c| c.pixel_size = px.max(1.0));
    }

    pub fn set_color(&self, hex: &str) {
        if let Some(rgb) = parse_hex_color(hex) {
            self.with_config(|c| c.color = rgb);
        } else {
            log::warn!("unparseable color {hex:?}; keeping current color");
        }
    }

    pub fn set_pattern_scale(&self, v: f32) {
        self.with_config(|c| c.pattern_scale = v);
    }

    pub fn set_pattern_density(&self, v: f32) {
        self.with_config(|c| c.pattern_density = v);
    }

    pub fn set_pixel_jitter(&self, v: f32) {
        self.with_config(|c| c.pixel_jitter = v);
    }

    pub fn set_ripples_enabled(&self, on: bool) {
        self.with_config(|c| c.enable_ripples = on);
    }

    pub fn set_ripple_speed(&self, v: f32) {
        self.with_config(|c| c.ripple_speed = v);
    }

    pub fn set_ripple_thickness(&self, v: f32) {
        self.with_config(|c| c.ripple_thickness = v);
    }

    pub fn set_ripple_intensity(&self, v: f32) {
        self.with_config(|c| c.ripple_intensity = v);
    }

    pub fn set_edge_fade(&self, v: f32) {
        self.with_config(|c| c.edge_fade = v);
    }

    pub fn set_speed(&self, v: f32) {
        self.with_config(|c| c.speed = v);
    }

    pub fn set_transparent(&self, on: bool) {
        self.with_config(|c| c.transparent = on);
    }

    pub fn set_liquid_strength(&self, v: f32) {
        self.with_config(|c| c.liquid_strength = v);
    }

    pub fn set_liquid_radius(&self, v: f32) {
        self.with_config(|c| c.liquid_radius = v);
    }

    pub fn set_liquid_wobble_speed(&self, v: f32) {
        self.with_config(|c| c.liquid_wobble_speed = v);
    }

    pub fn set_auto_pause_offscreen(&self, on: bool) {
        self.with_config(|c| c.auto_pause_offscreen = on);
    }

    // ---- reinit keys; changing one rebuilds the GPU session ----

    pub fn set_antialias(&self, on: bool) {
        self.with_config_reinit(|c| c.antialias = on);
    }

    pub fn set_liquid(&self, on: bool) {
        self.with_config_reinit(|c| c.liquid = on);
    }

    pub fn set_noise_amount(&self, v: f32) {
        self.with_config_reinit(|c| c.noise_amount = v.max(0.0));
    }

    /// Stop rendering and remove the canvas. The handle is inert afterwards.
    pub fn destroy(&self) {
        let mut mount = self.inner.borrow_mut();
        mount.destroyed = true;
        mount.generation = mount.generation.wrapping_add(1);
        mount.handles.take();
    }
}

impl PixelField {
    fn with_config(&self, f: impl FnOnce(&mut RenderConfig)) {
        let mount = self.inner.borrow();
        f(&mut mount.config.borrow_mut());
    }

    fn with_config_reinit(&self, f: impl FnOnce(&mut RenderConfig)) {
        let needs = {
            let mount = self.inner.borrow();
            let prev = mount.config.borrow().clone();
            f(&mut mount.config.borrow_mut());
            mount.config.borrow().needs_reinit(&prev)
        };
        if needs {
            rebuild(self.inner.clone());
        }
    }
}

fn rebuild(inner: Rc<RefCell<Mount>>) {
    {
        let mut mount = inner.borrow_mut();
        if mount.destroyed {
            return;
        }
        mount.generation = mount.generation.wrapping_add(1);
        mount.handles.take();
    }
    spawn_local(build_session(inner));
}

async fn build_session(inner: Rc<RefCell<Mount>>) {
    let (generation, container, config) = {
        let mount = inner.borrow();
        if mount.destroyed {
            return;
        }
        (mount.generation, mount.container.clone(), mount.config.clone())
    };
    let canvas = match dom::create_canvas(&container) {
        Ok(c) => c,
        Err(e) => {
            log::error!("canvas setup error: {e:?}");
            return;
        }
    };
    let cfg_snapshot = config.borrow().clone();
    let gpu = frame::init_gpu(&canvas, &cfg_snapshot).await;
    {
        // A reinit or destroy may have raced the async init.
        let mount = inner.borrow();
        if mount.destroyed || mount.generation != generation {
            canvas.remove();
            return;
        }
    }
    let Some(gpu) = gpu else {
        log::warn!("WebGPU unavailable; background disabled");
        canvas.remove();
        return;
    };

    let anim = Rc::new(RefCell::new(AnimationState::new()));
    let clicks = Rc::new(RefCell::new(ClickRegister::new()));
    let trail = cfg_snapshot
        .liquid
        .then(|| Rc::new(RefCell::new(TrailTexture::new())));
    let visible = Rc::new(Cell::new(true));
    let shader_time = Rc::new(Cell::new(0.0_f32));
    let cancelled = Rc::new(Cell::new(false));

    let listeners =
        events::attach_pointer_handlers(&canvas, &clicks, trail.as_ref(), &shader_time);
    let resize = events::observe_resize(&container, &canvas);
    let visibility = events::observe_visibility(&container, visible.clone());

    let ctx = frame::FrameContext {
        config: config.clone(),
        gpu: Some(gpu),
        anim: anim.clone(),
        clicks,
        trail,
        visible,
        shader_time,
        time_offset: frame::random_time_offset(),
        started: Instant::now(),
        canvas: canvas.clone(),
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)), cancelled.clone());
    frame::start_sequencer(anim, cancelled.clone());

    inner.borrow_mut().handles = Some(SessionHandles {
        cancelled,
        canvas,
        _listeners: listeners,
        _resize: resize,
        _visibility: visibility,
    });
}
