//! Static legend overlay naming the marker color semantics.

use globe_core::constants::{AGENCY_COLOR, HUB_COLOR, TALENT_COLOR, TEAM_COLOR};
use web_sys as web;

const LEGEND_ID: &str = "globe-legend";

fn css_rgb(color: [f32; 3]) -> String {
    format!(
        "rgb({},{},{})",
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8
    )
}

fn legend_row(label: &str, color: [f32; 3]) -> String {
    format!(
        "<span style=\"display:inline-flex;align-items:center;margin-right:12px\">\
         <span style=\"width:8px;height:8px;border-radius:50%;margin-right:6px;\
         display:inline-block;background:{}\"></span>{}</span>",
        css_rgb(color),
        label
    )
}

/// Create the legend next to the canvas if the host page did not supply one.
/// Static markup; not part of the animated core.
pub fn ensure_legend(document: &web::Document, canvas: &web::HtmlCanvasElement) {
    if document.get_element_by_id(LEGEND_ID).is_some() {
        return;
    }
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_id(LEGEND_ID);
    _ = el.set_attribute(
        "style",
        "font:12px sans-serif;opacity:0.8;padding:6px 0;user-select:none",
    );
    el.set_inner_html(&format!(
        "{}{}{}{}",
        legend_row("Hub", HUB_COLOR),
        legend_row("Talent", TALENT_COLOR),
        legend_row("Team", TEAM_COLOR),
        legend_row("Agency", AGENCY_COLOR),
    ));
    if let Some(parent) = canvas.parent_element() {
        _ = parent.append_child(&el);
    }
}
