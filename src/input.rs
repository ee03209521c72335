use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------

/// Pointer position in canvas backing pixels, y-down.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Pointer position normalized to 0..1 within the canvas, y-down. Positions
/// outside the element are clamped to the border.
#[inline]
pub fn pointer_canvas_norm(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        let u = ((ev.client_x() as f32 - rect.left() as f32) / w).clamp(0.0, 1.0);
        let v = ((ev.client_y() as f32 - rect.top() as f32) / h).clamp(0.0, 1.0);
        Vec2::new(u, v)
    } else {
        Vec2::new(0.5, 0.5)
    }
}

/// True when the pointer lies within the element bounds.
#[inline]
pub fn pointer_in_canvas(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> bool {
    let rect = canvas.get_bounding_client_rect();
    let x = ev.client_x() as f64;
    let y = ev.client_y() as f64;
    x >= rect.left() && x <= rect.right() && y >= rect.top() && y <= rect.bottom()
}
