use folio_core::{Rect, ScrollMetrics, Surface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The live document behind [`Surface`].
#[derive(Clone)]
pub struct WebSurface {
    window: web::Window,
    document: web::Document,
}

impl WebSurface {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }

    pub fn window(&self) -> &web::Window {
        &self.window
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }
}

fn html_elements(list: web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

impl Surface for WebSurface {
    type Node = web::HtmlElement;

    fn by_id(&self, id: &str) -> Option<web::HtmlElement> {
        self.document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn query_all(&self, scope: Option<&web::HtmlElement>, selector: &str) -> Vec<web::HtmlElement> {
        let list = match scope {
            Some(el) => el.query_selector_all(selector),
            None => self.document.query_selector_all(selector),
        };
        match list {
            Ok(list) => html_elements(list),
            Err(e) => {
                log::warn!("bad selector `{}`: {:?}", selector, e);
                Vec::new()
            }
        }
    }

    fn attribute(&self, node: &web::HtmlElement, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn add_class(&self, node: &web::HtmlElement, class: &str) {
        _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &web::HtmlElement, class: &str) {
        _ = node.class_list().remove_1(class);
    }

    fn has_class(&self, node: &web::HtmlElement, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_style(&self, node: &web::HtmlElement, property: &str, value: &str) {
        _ = node.style().set_property(property, value);
    }

    fn clear_style(&self, node: &web::HtmlElement, property: &str) {
        _ = node.style().remove_property(property);
    }

    fn set_text(&self, node: &web::HtmlElement, text: &str) {
        node.set_text_content(Some(text));
    }

    fn rect(&self, node: &web::HtmlElement) -> Rect {
        let r = node.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }

    fn metrics(&self) -> ScrollMetrics {
        let (scroll_top, scroll_height, client_height) = self
            .document
            .document_element()
            .map(|root| {
                (
                    f64::from(root.scroll_top()),
                    f64::from(root.scroll_height()),
                    f64::from(root.client_height()),
                )
            })
            .unwrap_or_default();
        let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        ScrollMetrics {
            viewport_width: px(self.window.inner_width()),
            viewport_height: px(self.window.inner_height()),
            scroll_x: self.window.scroll_x().unwrap_or(0.0),
            // some engines only report the offset on the root element
            scroll_y: self
                .window
                .scroll_y()
                .ok()
                .filter(|y| *y != 0.0)
                .unwrap_or(scroll_top),
            scroll_height,
            client_height,
        }
    }

    fn spawn_particle(&self, class_name: &str) -> Option<web::HtmlElement> {
        let el = self.document.create_element("div").ok()?;
        el.set_class_name(class_name);
        self.document.body()?.append_child(&el).ok()?;
        el.dyn_into().ok()
    }

    fn remove(&self, node: &web::HtmlElement) {
        node.remove();
    }

    fn on_animation_end(&self, node: &web::HtmlElement, callback: Box<dyn FnOnce()>) {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        let cb = Closure::once_into_js(move || callback());
        _ = node.add_event_listener_with_callback_and_add_event_listener_options(
            "animationend",
            cb.unchecked_ref(),
            &opts,
        );
    }

    fn scroll_to_top(&self) {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}
