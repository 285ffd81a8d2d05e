use crate::config::{PageConfig, Selectors};
use crate::error::AttachError;
use crate::surface::Surface;

/// Visible strictly above the threshold.
#[inline]
pub fn should_show(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub struct BackToTop<N> {
    node: N,
    threshold: f64,
    visible_class: &'static str,
}

impl<N: Clone + PartialEq> BackToTop<N> {
    pub fn attach<S: Surface<Node = N>>(
        surface: &S,
        selectors: &Selectors,
        config: &PageConfig,
    ) -> Result<Self, AttachError> {
        let node = surface
            .by_id(selectors.to_top_id)
            .ok_or(AttachError::MissingElement(selectors.to_top_id))?;
        Ok(Self {
            node,
            threshold: config.to_top_threshold_px,
            visible_class: selectors.to_top_visible_class,
        })
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn update<S: Surface<Node = N>>(&self, surface: &S) {
        if should_show(surface.metrics().scroll_y, self.threshold) {
            surface.add_class(&self.node, self.visible_class);
        } else {
            surface.remove_class(&self.node, self.visible_class);
        }
    }

    pub fn activate<S: Surface<Node = N>>(&self, surface: &S) {
        log::debug!("[to-top] scrolling to top");
        surface.scroll_to_top();
    }

    pub fn detach<S: Surface<Node = N>>(self, surface: &S) {
        surface.remove_class(&self.node, self.visible_class);
    }
}
