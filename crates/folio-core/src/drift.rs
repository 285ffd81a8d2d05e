use crate::config::{PageConfig, Selectors};
use crate::error::AttachError;
use crate::surface::Surface;

/// Downward shift of the hero text for a scroll offset, capped at `cap`.
#[inline]
pub fn drift_offset(scroll_y: f64, ratio: f64, cap: f64) -> f64 {
    (scroll_y * ratio).min(cap)
}

pub struct HeroDrift<N> {
    node: N,
    ratio: f64,
    cap: f64,
}

impl<N: Clone + PartialEq> HeroDrift<N> {
    pub fn attach<S: Surface<Node = N>>(
        surface: &S,
        selectors: &Selectors,
        config: &PageConfig,
    ) -> Result<Self, AttachError> {
        let node = surface
            .by_id(selectors.hero_text_id)
            .ok_or(AttachError::MissingElement(selectors.hero_text_id))?;
        Ok(Self {
            node,
            ratio: config.drift_ratio,
            cap: config.drift_cap_px,
        })
    }

    pub fn update<S: Surface<Node = N>>(&self, surface: &S) {
        let amount = drift_offset(surface.metrics().scroll_y, self.ratio, self.cap);
        surface.set_style(&self.node, "transform", &format!("translateY({amount}px)"));
    }

    pub fn detach<S: Surface<Node = N>>(self, surface: &S) {
        surface.clear_style(&self.node, "transform");
    }
}
