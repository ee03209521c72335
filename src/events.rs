//! DOM wiring with scoped teardown.
//!
//! Every listener and observer is held by a guard that unregisters itself on
//! drop, so tearing a mount down (or rebuilding it for a new GPU session)
//! cannot leave stale callbacks firing into freed state.

use crate::core::{ClickRegister, TrailTexture};
use crate::input;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ListenerGuard {
    target: web::EventTarget,
    name: &'static str,
    func: js_sys::Function,
    _closure: Box<dyn std::any::Any>,
}

impl ListenerGuard {
    pub fn new<T>(
        target: &web::EventTarget,
        name: &'static str,
        handler: impl FnMut(T) + 'static,
    ) -> Self
    where
        T: wasm_bindgen::convert::FromWasmAbi + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(T)>);
        let func: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        let _ = target.add_event_listener_with_callback(name, &func);
        Self {
            target: target.clone(),
            name,
            func,
            _closure: Box::new(closure),
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.name, &self.func);
    }
}

/// Click ripples listen on both the canvas and the window so clicks landing
/// on overlapping page content still spawn rings. A click hitting both
/// targets registers twice at the same position; the shader's max-combine
/// renders the pair as a single ring.
pub fn attach_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    clicks: &Rc<RefCell<ClickRegister>>,
    trail: Option<&Rc<RefCell<TrailTexture>>>,
    shader_time: &Rc<Cell<f32>>,
) -> Vec<ListenerGuard> {
    let window: web::EventTarget = match web::window() {
        Some(w) => w.into(),
        None => return Vec::new(),
    };
    let mut guards = Vec::new();

    let down = |guards: &mut Vec<ListenerGuard>, target: &web::EventTarget| {
        let canvas = canvas.clone();
        let clicks = clicks.clone();
        let shader_time = shader_time.clone();
        guards.push(ListenerGuard::new(
            target,
            "pointerdown",
            move |ev: web::PointerEvent| {
                // Clicks are always recorded; the shader gates ring rendering
                // on the enable flag, so re-enabling ripples picks up rings
                // from clicks that landed while they were off.
                if !input::pointer_in_canvas(&ev, &canvas) {
                    return;
                }
                let px = input::pointer_canvas_px(&ev, &canvas);
                clicks.borrow_mut().push(px, shader_time.get());
            },
        ));
    };
    let canvas_target: web::EventTarget = canvas.clone().into();
    down(&mut guards, &canvas_target);
    down(&mut guards, &window);

    if let Some(trail) = trail {
        let canvas = canvas.clone();
        let trail = trail.clone();
        guards.push(ListenerGuard::new(
            &window,
            "pointermove",
            move |ev: web::PointerEvent| {
                if input::pointer_in_canvas(&ev, &canvas) {
                    trail.borrow_mut().add_touch(input::pointer_canvas_norm(&ev, &canvas));
                }
            },
        ));
    }

    guards
}

pub struct ResizeGuard {
    observer: web::ResizeObserver,
    _closure: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for ResizeGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Track the container's layout size and keep the canvas backing store at
/// CSS size * devicePixelRatio. The GPU surface follows on the next frame.
pub fn observe_resize(
    container: &web::HtmlElement,
    canvas: &web::HtmlCanvasElement,
) -> Option<ResizeGuard> {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
        crate::dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut(js_sys::Array)>);
    let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref()).ok()?;
    observer.observe(container);
    Some(ResizeGuard {
        observer,
        _closure: closure,
    })
}

pub struct VisibilityGuard {
    observer: web::IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for VisibilityGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Flip `visible` as the container scrolls in and out of the viewport.
pub fn observe_visibility(
    container: &web::HtmlElement,
    visible: Rc<Cell<bool>>,
) -> Option<VisibilityGuard> {
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        if let Ok(entry) = entries.get(0).dyn_into::<web::IntersectionObserverEntry>() {
            visible.set(entry.is_intersecting());
        }
    }) as Box<dyn FnMut(js_sys::Array)>);
    let observer = web::IntersectionObserver::new(closure.as_ref().unchecked_ref()).ok()?;
    observer.observe(container);
    Some(VisibilityGuard {
        observer,
        _closure: closure,
    })
}
