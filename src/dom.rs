use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn container_by_id(id: &str) -> anyhow::Result<web::HtmlElement> {
    let document = window_document().ok_or_else(|| anyhow!("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing container #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))
}

/// Create a canvas filling the container, positioned behind its content.
pub fn create_canvas(container: &web::HtmlElement) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    let style = canvas.style();
    style.set_property("position", "absolute").ok();
    style.set_property("inset", "0").ok();
    style.set_property("width", "100%").ok();
    style.set_property("height", "100%").ok();
    style.set_property("pointer-events", "none").ok();
    container
        .append_child(&canvas)
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    sync_canvas_backing_size(&canvas);
    Ok(canvas)
}

/// Keep the canvas internal pixel size at CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn device_pixel_ratio() -> f32 {
    web::window().map(|w| w.device_pixel_ratio() as f32).unwrap_or(1.0)
}
