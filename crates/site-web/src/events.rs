use crate::constants::SECTION_CONTAINER_ID;
use crate::{dom, indicator};
use site_core::{
    wheel_event_for_delta, NavEffect, NavEvent, Navigator, Sections, SECTION_COOLDOWN_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the navigation side effects need. One instance per page
/// session, shared by the wheel handler, the marker click handlers and the
/// cooldown timer.
pub struct NavWiring {
    pub document: web::Document,
    pub sections: Rc<Sections>,
    pub navigator: Rc<RefCell<Navigator>>,
}

/// Executes a transition's effect list in order. Callers must have released
/// their navigator borrow first.
pub fn run_effects(wiring: &Rc<NavWiring>, effects: &[NavEffect]) {
    for effect in effects {
        match effect {
            NavEffect::StartCooldown => schedule_cooldown(wiring),
            NavEffect::ScrollToSection(index) => {
                if let Some(id) = wiring.sections.id(*index) {
                    if let Err(e) = dom::scroll_section_into_view(&wiring.document, id) {
                        log::warn!("scroll skipped: {e}");
                    }
                }
            }
            NavEffect::RefreshIndicator => {
                indicator::refresh(&wiring.document, &wiring.navigator.borrow());
            }
        }
    }
}

// One-shot timer feeding CooldownElapsed back into the machine. Overlap is
// impossible: wheel events are swallowed while cooling. Firing after
// teardown only touches discarded state.
fn schedule_cooldown(wiring: &Rc<NavWiring>) {
    let wiring_timer = wiring.clone();
    let cb = Closure::once_into_js(move || {
        let effects = wiring_timer
            .navigator
            .borrow_mut()
            .handle(NavEvent::CooldownElapsed);
        run_effects(&wiring_timer, &effects);
    });
    if let Some(window) = web::window() {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            SECTION_COOLDOWN_MS,
        );
    }
}

/// Intercepts wheel events inside the section container. Registered with
/// `passive: false` so native scrolling can be fully suppressed; the custom
/// snapping replaces it.
pub fn wire_wheel(wiring: &Rc<NavWiring>) -> anyhow::Result<()> {
    let container = wiring
        .document
        .get_element_by_id(SECTION_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{SECTION_CONTAINER_ID}"))?;

    let wiring_wheel = wiring.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(event) = wheel_event_for_delta(ev.delta_y()) {
            let effects = wiring_wheel.navigator.borrow_mut().handle(event);
            run_effects(&wiring_wheel, &effects);
        }
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    container
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}

/// Clicking marker k jumps straight to section k, cooldown or not.
pub fn wire_indicator_clicks(wiring: &Rc<NavWiring>) {
    for index in 0..wiring.sections.len() {
        let wiring_click = wiring.clone();
        dom::add_click_listener(&wiring.document, &indicator::marker_id(index), move || {
            let effects = wiring_click
                .navigator
                .borrow_mut()
                .handle(NavEvent::IndicatorClick(index));
            run_effects(&wiring_click, &effects);
        });
    }
}
