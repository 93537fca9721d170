use web_sys as web;

#[inline]
pub fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow::anyhow!("no window"))
}

#[inline]
pub fn document(window: &web::Window) -> anyhow::Result<web::Document> {
    window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))
}

/// Current `innerWidth` x `innerHeight` in CSS pixels (0 if unreadable).
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok()
            .and_then(|js| js.as_f64())
            .map(|px| px.max(0.0) as u32)
            .unwrap_or(0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}
