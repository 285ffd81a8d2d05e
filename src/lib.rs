#![cfg(target_arch = "wasm32")]
use folio_core::{year, PageConfig, Portfolio, Selectors};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod dom;
mod events;
mod frame;
mod observer;
mod surface;

use dom::Listener;
use events::SharedPage;
use frame::FrameLoop;
use observer::NativeObserver;
use surface::WebSurface;

/// Everything the page keeps alive between events.
struct App {
    page: SharedPage,
    surface: WebSurface,
    listeners: Vec<Listener>,
    observers: Vec<NativeObserver>,
    frame: Option<FrameLoop>,
}

impl App {
    fn teardown(self) {
        if let Some(f) = self.frame {
            f.stop();
        }
        for o in self.observers {
            o.disconnect();
        }
        for l in self.listeners {
            l.remove();
        }
        match Rc::try_unwrap(self.page) {
            Ok(page) => page.into_inner().detach(&self.surface),
            Err(_) => log::warn!("[page] still referenced; inline state left in place"),
        }
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Removes every listener and observer and stops the frame loop.
#[wasm_bindgen]
pub fn detach() {
    if let Some(app) = APP.with(|a| a.borrow_mut().take()) {
        app.teardown();
    }
}

fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_document()
        .ok_or_else(|| anyhow::anyhow!("no window or document"))?;
    let surface = WebSurface::new(window, document);
    let config = PageConfig::default();
    let selectors = Selectors::default();

    let this_year = js_sys::Date::new_0().get_full_year() as i32;
    if let Err(e) = year::stamp_year(&surface, &selectors, this_year) {
        log::debug!("[year] skipped: {}", e);
    }

    let page: SharedPage = Rc::new(RefCell::new(Portfolio::attach(
        &surface,
        &config,
        &selectors,
        StdRng::from_entropy(),
    )));

    let mut listeners = Vec::new();
    listeners.extend(events::wire_scroll(&surface, &page));
    listeners.extend(events::wire_pointer(&surface, &page));
    listeners.extend(events::wire_avatar(&surface, &page));
    listeners.extend(events::wire_sparkles(&surface, &page));
    listeners.extend(events::wire_to_top(&surface, &page));

    let observers: Vec<NativeObserver> = [
        events::wire_nav_observer(&config.nav_band, &surface, &page),
        events::wire_reveal_observer(&config.reveal_band, &surface, &page),
    ]
    .into_iter()
    .flatten()
    .collect();

    let frame = events::start_cursor_loop(&surface, &page);
    log::info!(
        "[page] {} listeners, {} observers, frame loop {}",
        listeners.len(),
        observers.len(),
        if frame.is_some() { "running" } else { "off" }
    );

    let app = App {
        page,
        surface,
        listeners,
        observers,
        frame,
    };
    if let Some(previous) = APP.with(|a| a.borrow_mut().replace(app)) {
        previous.teardown();
    }
    Ok(())
}
