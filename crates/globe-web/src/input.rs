use globe_core::PointerSource;
use web_sys as web;

/// Map the DOM pointer type onto the drag sensitivity class; touch gestures
/// sweep shorter distances than mouse drags.
#[inline]
pub fn pointer_source(ev: &web::PointerEvent) -> PointerSource {
    if ev.pointer_type() == "touch" {
        PointerSource::Touch
    } else {
        PointerSource::Mouse
    }
}

#[inline]
pub fn client_x(ev: &web::PointerEvent) -> f32 {
    ev.client_x() as f32
}
