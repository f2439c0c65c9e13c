use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// Size the canvas backing store to a device-pixel-ratio-scaled square from
/// the measured container width; width == height keeps the sphere circular.
pub fn sync_square_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let side = (rect.width() * dpr) as u32;
        canvas.set_width(side.max(1));
        canvas.set_height(side.max(1));
    }
}

/// Text content of a `<script type="application/json">` feed element, if any.
pub fn inline_feed_json(document: &web::Document, id: &str) -> Option<String> {
    document.get_element_by_id(id)?.text_content()
}
