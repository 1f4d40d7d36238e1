use crate::constants::{SPLASH_DURATION_MS, SPLASH_ID};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SPLASH_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Hides the splash overlay after its fixed display window. Cosmetic only;
/// no other state depends on it, and a missing overlay is a no-op.
pub fn schedule_hide(document: &web::Document) {
    let doc = document.clone();
    let cb = Closure::once_into_js(move || hide(&doc));
    if let Some(window) = web::window() {
        _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.unchecked_ref(),
                SPLASH_DURATION_MS,
            );
    }
}
