use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// A registered event listener. Dropping it without [`Listener::remove`]
/// leaves the JS side pointing at a freed closure, so the app keeps every
/// listener until teardown.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn remove(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub fn listen(
    target: &web::EventTarget,
    kind: &'static str,
    passive: bool,
    handler: impl FnMut(web::Event) + 'static,
) -> Option<Listener> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    match target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        Ok(()) => Some(Listener {
            target: target.clone(),
            kind,
            closure,
        }),
        Err(e) => {
            log::warn!("addEventListener({}) failed: {:?}", kind, e);
            None
        }
    }
}

/// Pointer position of a mouse event in viewport coordinates.
#[inline]
pub fn client_pos(ev: &web::Event) -> Option<(f64, f64)> {
    let me = ev.dyn_ref::<web::MouseEvent>()?;
    Some((f64::from(me.client_x()), f64::from(me.client_y())))
}
