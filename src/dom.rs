use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Size the canvas backing store to the window's inner size and return it.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> anyhow::Result<(u32, u32)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| anyhow::anyhow!("window.innerWidth unavailable"))?;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| anyhow::anyhow!("window.innerHeight unavailable"))?;
    let w_px = (w as u32).max(1);
    let h_px = (h as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    Ok((w_px, h_px))
}

/// Re-sync the canvas on every window `resize` and hand the new size to
/// `on_resize`.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, mut on_resize: impl FnMut(u32, u32) + 'static) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        match sync_canvas_to_window(&canvas_resize) {
            Ok((w, h)) => on_resize(w, h),
            Err(e) => log::warn!("[dom] resize skipped: {e}"),
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
