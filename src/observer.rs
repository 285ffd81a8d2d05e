use folio_core::{IntersectionEntry, TriggerBand};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;
type Batch = Vec<IntersectionEntry<web::HtmlElement>>;

/// Browser `IntersectionObserver` configured from a [`TriggerBand`].
pub struct NativeObserver {
    observer: web::IntersectionObserver,
    _callback: EntriesCallback,
}

impl NativeObserver {
    pub fn new(
        band: &TriggerBand,
        mut on_entries: impl FnMut(Batch, &web::IntersectionObserver) + 'static,
    ) -> Option<Self> {
        let handler = move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let batch: Batch = entries
                .iter()
                .filter_map(|v| v.dyn_into::<web::IntersectionObserverEntry>().ok())
                .filter_map(|e| {
                    Some(IntersectionEntry {
                        target: e.target().dyn_into::<web::HtmlElement>().ok()?,
                        is_intersecting: e.is_intersecting(),
                        ratio: e.intersection_ratio(),
                    })
                })
                .collect();
            on_entries(batch, &observer);
        };
        let boxed: Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)> = Box::new(handler);
        let callback: EntriesCallback = Closure::wrap(boxed);

        let init = web::IntersectionObserverInit::new();
        init.set_root_margin(&band.margin.css());
        init.set_threshold(&JsValue::from_f64(band.threshold));
        let js_callback = callback.as_ref().unchecked_ref();
        match web::IntersectionObserver::new_with_options(js_callback, &init) {
            Ok(observer) => Some(Self {
                observer,
                _callback: callback,
            }),
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                None
            }
        }
    }

    pub fn observe(&self, target: &web::HtmlElement) {
        self.observer.observe(target);
    }

    pub fn disconnect(self) {
        self.observer.disconnect();
    }
}
