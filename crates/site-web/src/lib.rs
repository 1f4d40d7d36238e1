//! Browser entry point for the portfolio site.
//!
//! The host page supplies the skeleton this module wires itself onto:
//! `#background-canvas` (full-viewport canvas behind the content),
//! `#section-container` (wheel-capture container holding the panels),
//! one panel per section (`#home`, `#about`, `#projects`, `#contact`),
//! `#section-nav` (side indicator container, markers are created there)
//! and `#splash` (overlay hidden shortly after load).

#![cfg(target_arch = "wasm32")]

use crate::constants::CANVAS_ID;
use site_core::{Navigator, ParticleField, Sections, PARTICLE_COUNT};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod indicator;
mod render;
mod splash;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    splash::schedule_hide(&document);

    // Section navigation works with or without the particle background.
    let sections = Rc::new(Sections::default());
    let navigator = Rc::new(RefCell::new(Navigator::new(sections.len())));
    indicator::build(&document, &sections)?;
    let wiring = Rc::new(events::NavWiring {
        document: document.clone(),
        sections,
        navigator: navigator.clone(),
    });
    events::wire_wheel(&wiring)?;
    events::wire_indicator_clicks(&wiring);
    indicator::refresh(&document, &navigator.borrow());

    // Fatal to the background only: log once and leave the page usable.
    if let Err(e) = start_background(&document) {
        log::error!("particle background disabled: {e:?}");
    }
    Ok(())
}

fn start_background(document: &web::Document) -> anyhow::Result<()> {
    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let renderer = render::CanvasRenderer::acquire(&canvas)?;

    let seed = js_sys::Date::now() as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(
        width as f32,
        height as f32,
        PARTICLE_COUNT,
        seed,
    )));
    wire_canvas_resize(&canvas, field.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { field, renderer }));
    let handle = frame::start_loop(frame_ctx);
    wire_background_teardown(handle);
    Ok(())
}

// Resize moves the reflection bounds, never the particles themselves; one
// stranded outside walks back on its own.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        field.borrow_mut().resize(w as f32, h as f32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

// The frame request outstanding at teardown must not fire into a torn-down
// surface; pagehide is the teardown signal a page session gets.
fn wire_background_teardown(handle: frame::FrameHandle) {
    let closure = Closure::wrap(Box::new(move || {
        handle.cancel();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
