use folio_core::CancelHandle;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling `requestAnimationFrame` loop.
///
/// Runs until the step returns `false` or the handle is cancelled.
pub struct FrameLoop {
    handle: CancelHandle,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

fn request_frame(tick: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window()?
        .request_animation_frame(tick.as_ref().unchecked_ref())
        .ok()
}

impl FrameLoop {
    pub fn start(handle: CancelHandle, mut step: impl FnMut() -> bool + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if handle_tick.is_cancelled() || !step() {
                return;
            }
            if let Some(cb) = tick_clone.borrow().as_ref() {
                pending_tick.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            pending.set(request_frame(cb));
        }
        Self {
            handle,
            pending,
            tick,
        }
    }

    pub fn stop(self) {
        self.handle.cancel();
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure's self-reference so it can be freed
        self.tick.borrow_mut().take();
    }
}
