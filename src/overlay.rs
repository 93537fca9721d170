use crate::constants::{OVERLAY_CANVAS_ID, OVERLAY_STYLE};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create the full-viewport overlay canvas and append it to `<body>`.
///
/// A stale overlay left behind by an earlier mount is replaced.
pub fn create(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(stale) = document.get_element_by_id(OVERLAY_CANVAS_ID) {
        log::warn!("[overlay] replacing existing #{}", OVERLAY_CANVAS_ID);
        stale.remove();
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let el = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?;
    el.set_id(OVERLAY_CANVAS_ID);
    el.set_attribute("style", OVERLAY_STYLE)
        .map_err(|e| anyhow::anyhow!("style canvas: {:?}", e))?;
    el.set_attribute("aria-hidden", "true")
        .map_err(|e| anyhow::anyhow!("aria-hidden: {:?}", e))?;
    body.append_child(&el)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

#[inline]
pub fn remove(canvas: &web::HtmlCanvasElement) {
    canvas.remove();
}
