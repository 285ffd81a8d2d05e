//! In-memory document used to exercise the controllers off the browser.
//!
//! Layout is stored in page coordinates; [`Surface::rect`] subtracts the
//! current scroll offset, so moving the scroll position moves every element
//! through the viewport the way a real page does.

use crate::surface::{Rect, ScrollMetrics, Surface};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MockNode(usize);

#[derive(Default)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    layout: Rect,
    parent: Option<usize>,
    children: Vec<usize>,
    attached: bool,
}

#[derive(Default)]
struct Inner {
    elements: Vec<Element>,
    metrics: ScrollMetrics,
    animation_end: BTreeMap<usize, Vec<Box<dyn FnOnce()>>>,
    scroll_requests: usize,
}

#[derive(Clone)]
pub struct MockPage {
    inner: Rc<RefCell<Inner>>,
}

impl MockPage {
    /// Empty page with only a `<body>`; the document is as tall as the viewport.
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let body = Element {
            tag: "body".to_string(),
            attached: true,
            layout: Rect::new(0.0, 0.0, viewport_width, viewport_height),
            ..Default::default()
        };
        let inner = Inner {
            elements: vec![body],
            metrics: ScrollMetrics {
                viewport_width,
                viewport_height,
                scroll_height: viewport_height,
                client_height: viewport_height,
                ..Default::default()
            },
            ..Default::default()
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn body(&self) -> MockNode {
        MockNode(0)
    }

    pub fn append(&self, parent: MockNode, tag: &str) -> MockNode {
        let mut inner = self.inner.borrow_mut();
        let idx = inner.elements.len();
        let attached = inner.elements[parent.0].attached;
        inner.elements.push(Element {
            tag: tag.to_string(),
            parent: Some(parent.0),
            attached,
            ..Default::default()
        });
        inner.elements[parent.0].children.push(idx);
        MockNode(idx)
    }

    pub fn set_attr(&self, node: MockNode, name: &str, value: &str) {
        let mut inner = self.inner.borrow_mut();
        if name == "class" {
            inner.elements[node.0].classes =
                value.split_whitespace().map(str::to_string).collect();
        } else {
            inner.elements[node.0]
                .attrs
                .insert(name.to_string(), value.to_string());
        }
    }

    /// Places the node at a page-space position.
    pub fn set_layout(&self, node: MockNode, layout: Rect) {
        self.inner.borrow_mut().elements[node.0].layout = layout;
    }

    pub fn set_scroll(&self, scroll_y: f64) {
        self.inner.borrow_mut().metrics.scroll_y = scroll_y;
    }

    pub fn set_scroll_height(&self, scroll_height: f64) {
        self.inner.borrow_mut().metrics.scroll_height = scroll_height;
    }

    pub fn style(&self, node: MockNode, property: &str) -> Option<String> {
        self.inner.borrow().elements[node.0]
            .styles
            .get(property)
            .cloned()
    }

    pub fn text(&self, node: MockNode) -> String {
        self.inner.borrow().elements[node.0].text.clone()
    }

    pub fn classes(&self, node: MockNode) -> Vec<String> {
        self.inner.borrow().elements[node.0].classes.clone()
    }

    pub fn is_attached(&self, node: MockNode) -> bool {
        self.inner.borrow().elements[node.0].attached
    }

    pub fn scroll_requests(&self) -> usize {
        self.inner.borrow().scroll_requests
    }

    /// Delivers the animation-end signal to `node`.
    pub fn finish_animation(&self, node: MockNode) {
        let callbacks = self
            .inner
            .borrow_mut()
            .animation_end
            .remove(&node.0)
            .unwrap_or_default();
        for callback in callbacks {
            callback();
        }
    }

    fn walk(&self, from: usize, out: &mut Vec<usize>) {
        let inner = self.inner.borrow();
        let roots = &inner.elements[from].children;
        let mut stack: Vec<usize> = roots.iter().rev().copied().collect();
        while let Some(idx) = stack.pop() {
            out.push(idx);
            stack.extend(inner.elements[idx].children.iter().rev().copied());
        }
    }
}

/// Compound selector: `tag`, `#id`, `.class` and `[attr]` / `[attr=value]`
/// parts, no combinators.
#[derive(Default, Debug)]
struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl Selector {
    fn parse(input: &str) -> Self {
        let mut sel = Selector::default();
        let mut rest = input.trim();
        let tag_end = rest.find(&['#', '.', '['][..]).unwrap_or(rest.len());
        if tag_end > 0 {
            sel.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];
        while let Some(first) = rest.chars().next() {
            match first {
                '[' => {
                    let end = rest.find(']').unwrap_or(rest.len());
                    let body = &rest[1..end];
                    let attr = match body.split_once('=') {
                        Some((name, value)) => (
                            name.trim().to_string(),
                            Some(value.trim().trim_matches(&['"', '\''][..]).to_string()),
                        ),
                        None => (body.trim().to_string(), None),
                    };
                    sel.attrs.push(attr);
                    rest = rest.get(end + 1..).unwrap_or("");
                }
                '#' | '.' => {
                    let end = rest[1..]
                        .find(&['#', '.', '['][..])
                        .map(|i| i + 1)
                        .unwrap_or(rest.len());
                    let name = rest[1..end].to_string();
                    if first == '#' {
                        sel.id = Some(name);
                    } else {
                        sel.classes.push(name);
                    }
                    rest = &rest[end..];
                }
                _ => break,
            }
        }
        sel
    }

    fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if &el.tag != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.attrs.get("id") != Some(id) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.classes.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|(name, value)| match value {
            Some(v) => el.attrs.get(name) == Some(v),
            None => el.attrs.contains_key(name),
        })
    }
}

impl Surface for MockPage {
    type Node = MockNode;

    fn by_id(&self, id: &str) -> Option<MockNode> {
        self.query_all(None, &format!("#{id}")).into_iter().next()
    }

    fn query_all(&self, scope: Option<&MockNode>, selector: &str) -> Vec<MockNode> {
        let sel = Selector::parse(selector);
        let mut order = Vec::new();
        self.walk(scope.map_or(0, |n| n.0), &mut order);
        let inner = self.inner.borrow();
        order
            .into_iter()
            .filter(|&i| {
                let el = &inner.elements[i];
                el.attached && sel.matches(el)
            })
            .map(MockNode)
            .collect()
    }

    fn attribute(&self, node: &MockNode, name: &str) -> Option<String> {
        let inner = self.inner.borrow();
        let el = &inner.elements[node.0];
        if name == "class" {
            return Some(el.classes.join(" "));
        }
        el.attrs.get(name).cloned()
    }

    fn add_class(&self, node: &MockNode, class: &str) {
        let mut inner = self.inner.borrow_mut();
        let classes = &mut inner.elements[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &MockNode, class: &str) {
        self.inner.borrow_mut().elements[node.0]
            .classes
            .retain(|c| c != class);
    }

    fn has_class(&self, node: &MockNode, class: &str) -> bool {
        self.inner.borrow().elements[node.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn set_style(&self, node: &MockNode, property: &str, value: &str) {
        self.inner.borrow_mut().elements[node.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn clear_style(&self, node: &MockNode, property: &str) {
        self.inner.borrow_mut().elements[node.0]
            .styles
            .remove(property);
    }

    fn set_text(&self, node: &MockNode, text: &str) {
        self.inner.borrow_mut().elements[node.0].text = text.to_string();
    }

    fn rect(&self, node: &MockNode) -> Rect {
        let inner = self.inner.borrow();
        let layout = inner.elements[node.0].layout;
        Rect {
            left: layout.left - inner.metrics.scroll_x,
            top: layout.top - inner.metrics.scroll_y,
            ..layout
        }
    }

    fn metrics(&self) -> ScrollMetrics {
        self.inner.borrow().metrics
    }

    fn spawn_particle(&self, class_name: &str) -> Option<MockNode> {
        let node = self.append(self.body(), "div");
        self.set_attr(node, "class", class_name);
        Some(node)
    }

    fn remove(&self, node: &MockNode) {
        let mut subtree = vec![node.0];
        self.walk(node.0, &mut subtree);
        let mut inner = self.inner.borrow_mut();
        if let Some(parent) = inner.elements[node.0].parent.take() {
            inner.elements[parent].children.retain(|&c| c != node.0);
        }
        for idx in subtree {
            inner.elements[idx].attached = false;
        }
    }

    fn on_animation_end(&self, node: &MockNode, callback: Box<dyn FnOnce()>) {
        self.inner
            .borrow_mut()
            .animation_end
            .entry(node.0)
            .or_default()
            .push(callback);
    }

    fn scroll_to_top(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.scroll_requests += 1;
        inner.metrics.scroll_y = 0.0;
    }
}
