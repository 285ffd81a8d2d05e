use super::SharedPage;
use crate::dom::{self, Listener};
use crate::observer::NativeObserver;
use crate::surface::WebSurface;
use folio_core::TriggerBand;

/// Progress bar, hero drift and back-to-top visibility.
pub fn wire_scroll(surface: &WebSurface, page: &SharedPage) -> Option<Listener> {
    let target = surface.document().clone();
    let surface = surface.clone();
    let page = page.clone();
    dom::listen(&target, "scroll", true, move |_| {
        page.borrow().on_scroll(&surface);
    })
}

pub fn wire_to_top(surface: &WebSurface, page: &SharedPage) -> Option<Listener> {
    let button = page.borrow().to_top.as_ref()?.node().clone();
    let surface = surface.clone();
    let page = page.clone();
    dom::listen(&button, "click", false, move |_| {
        page.borrow().on_to_top_click(&surface);
    })
}

pub fn wire_nav_observer(
    band: &TriggerBand,
    surface: &WebSurface,
    page: &SharedPage,
) -> Option<NativeObserver> {
    let sections = page.borrow().nav.as_ref()?.sections().to_vec();
    let surface = surface.clone();
    let page_cb = page.clone();
    let observer = NativeObserver::new(band, move |entries, _| {
        page_cb.borrow_mut().on_nav_entries(&surface, &entries);
    })?;
    for section in &sections {
        observer.observe(section);
    }
    Some(observer)
}

/// Reveals fire once; revealed targets are dropped from the observer.
pub fn wire_reveal_observer(
    band: &TriggerBand,
    surface: &WebSurface,
    page: &SharedPage,
) -> Option<NativeObserver> {
    let targets = page.borrow().reveal.as_ref()?.targets().to_vec();
    let surface = surface.clone();
    let page_cb = page.clone();
    let observer = NativeObserver::new(band, move |entries, observer| {
        let done = page_cb.borrow_mut().on_reveal_entries(&surface, &entries);
        for el in &done {
            observer.unobserve(el);
        }
    })?;
    for target in &targets {
        observer.observe(target);
    }
    Some(observer)
}
