use crate::core::{
    build_field_uniforms, build_post_uniforms, AnimationState, ClickRegister, RenderConfig,
    TrailTexture, SEQUENCER_START_DELAY_MS, TIME_OFFSET_RANGE,
};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub config: Rc<RefCell<RenderConfig>>,
    pub gpu: Option<render::GpuSession<'a>>,
    pub anim: Rc<RefCell<AnimationState>>,
    pub clicks: Rc<RefCell<ClickRegister>>,
    pub trail: Option<Rc<RefCell<TrailTexture>>>,
    pub visible: Rc<Cell<bool>>,
    /// Shader time of the most recent frame; click handlers timestamp rings
    /// with it so ring ages line up with what the shader sees.
    pub shader_time: Rc<Cell<f32>>,

    pub time_offset: f32,
    pub started: Instant,
    pub canvas: web::HtmlCanvasElement,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let cfg = self.config.borrow().clone();
        // Offscreen: skip the work but stay scheduled, so scrolling back
        // resumes without a rebuild.
        if cfg.auto_pause_offscreen && !self.visible.get() {
            return;
        }
        let now_ms = js_sys::Date::now();
        let t = self.time_offset + self.started.elapsed().as_secs_f32() * cfg.speed;
        self.shader_time.set(t);
        self.anim.borrow_mut().sample(now_ms);

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        if let Some(trail) = &self.trail {
            let mut tt = trail.borrow_mut();
            tt.set_radius_scale(cfg.liquid_radius);
            tt.update();
            if tt.take_dirty() {
                gpu.upload_trail(tt.pixels());
            }
        }

        let w = self.canvas.width();
        let h = self.canvas.height();
        gpu.resize_if_needed(w, h);

        let anim = self.anim.borrow();
        let field_u = build_field_uniforms(
            &cfg,
            &anim,
            &self.clicks.borrow(),
            w as f32,
            h as f32,
            dom::device_pixel_ratio(),
            t,
            anim.effect_times(now_ms),
        );
        let post_u = build_post_uniforms(&cfg, w as f32, h as f32, t);
        if let Err(e) = gpu.render(&field_u, &post_u, cfg.clear_color()) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    cfg: &RenderConfig,
) -> Option<render::GpuSession<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuSession::new(leaked_canvas, cfg).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive the frame context from requestAnimationFrame until `cancelled`
/// flips. The closure keeps itself alive by holding its own handle.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>, cancelled: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled.get() {
            tick_clone.borrow_mut().take();
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Run the preset calendar on a self-rescheduling timeout. Each tick asks the
/// sequencer how long to sleep next; the first tick fires after the start
/// delay so the field settles before the first preset fades in.
pub fn start_sequencer(anim: Rc<RefCell<AnimationState>>, cancelled: Rc<Cell<bool>>) {
    let timer: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let timer_clone = timer.clone();
    *timer.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled.get() {
            timer_clone.borrow_mut().take();
            return;
        }
        let delay_ms = anim.borrow_mut().on_timer(js_sys::Date::now());
        if let Some(w) = web::window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                timer_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
                delay_ms as i32,
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            timer.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            SEQUENCER_START_DELAY_MS as i32,
        );
    }
}

/// Random shader-time offset so multiple mounts never animate in lockstep.
pub fn random_time_offset() -> f32 {
    let mut buf = [0u8; 4];
    let frac = match getrandom::getrandom(&mut buf) {
        Ok(()) => u32::from_le_bytes(buf) as f64 / u32::MAX as f64,
        Err(_) => js_sys::Math::random(),
    };
    (frac * TIME_OFFSET_RANGE as f64) as f32
}
