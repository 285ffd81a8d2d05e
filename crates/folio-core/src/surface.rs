//! The page as seen by the controllers.
//!
//! Implementations wrap a live document (`folio-web`) or an in-memory tree
//! ([`crate::MockPage`]). All calls are infallible from the caller's point of
//! view; an implementation ignores mutations it cannot apply.

/// Axis-aligned box in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Viewport size and scroll state of the document.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
    /// Total height of the scrollable document.
    pub scroll_height: f64,
    /// Visible height of the document element (excludes scrollbars).
    pub client_height: f64,
}

pub trait Surface: Clone + 'static {
    type Node: Clone + PartialEq + 'static;

    fn by_id(&self, id: &str) -> Option<Self::Node>;
    /// Matching elements in document order. `scope` limits the search to the
    /// descendants of a node.
    fn query_all(&self, scope: Option<&Self::Node>, selector: &str) -> Vec<Self::Node>;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Sets an inline style property, custom properties (`--name`) included.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    fn clear_style(&self, node: &Self::Node, property: &str);
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Border box relative to the viewport.
    fn rect(&self, node: &Self::Node) -> Rect;
    fn metrics(&self) -> ScrollMetrics;

    /// Appends a new element with the given class list to the body.
    fn spawn_particle(&self, class_name: &str) -> Option<Self::Node>;
    fn remove(&self, node: &Self::Node);
    /// Runs `callback` once, when the node's CSS animation finishes.
    fn on_animation_end(&self, node: &Self::Node, callback: Box<dyn FnOnce()>);

    /// Smooth-scrolls the page to offset 0.
    fn scroll_to_top(&self);
}
