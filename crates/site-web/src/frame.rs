use crate::render::CanvasRenderer;
use site_core::ParticleField;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub renderer: CanvasRenderer,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut field = self.field.borrow_mut();
        field.tick();
        self.renderer.draw(&field);
    }
}

/// Control handle for the animation loop. Dropping it leaves the loop
/// running for the page session; `cancel` revokes the outstanding frame
/// request and stops rescheduling.
pub struct FrameHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    active: Rc<Cell<bool>>,
}

impl FrameHandle {
    pub fn cancel(&self) {
        self.active.set(false);
        if let Some(window) = web::window() {
            if let Some(id) = self.raf_id.take() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// Starts the self-rescheduling requestAnimationFrame loop. Every frame
/// advances the field and repaints; there is no stop condition other than
/// cancellation through the returned handle.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameHandle {
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let active = Rc::new(Cell::new(true));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_for_tick = raf_id.clone();
    let active_for_tick = active.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !active_for_tick.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_for_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(Some(id));
        }
    }
    FrameHandle { raf_id, active }
}
