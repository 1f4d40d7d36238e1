use site_core::SiteError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Current viewport size in CSS pixels.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Matches the canvas backing size to the viewport. Particle coordinates and
/// the connection radius are viewport units, so no pixel-ratio scaling here.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = viewport_size().unwrap_or((1.0, 1.0));
    let w_px = (w as u32).max(1);
    let h_px = (h as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

/// Smooth-scrolls the panel with this id into view. A missing panel is the
/// non-fatal failure kind; the caller decides whether to log it.
pub fn scroll_section_into_view(
    document: &web::Document,
    section_id: &str,
) -> Result<(), SiteError> {
    let el = document
        .get_element_by_id(section_id)
        .ok_or_else(|| SiteError::SectionElementNotFound(section_id.to_string()))?;
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    Ok(())
}
