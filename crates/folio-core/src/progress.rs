//! Reading-progress bar.

use crate::config::Selectors;
use crate::error::AttachError;
use crate::surface::{ScrollMetrics, Surface};

/// Scrolled fraction of the document in `[0, 1]`; 0 when nothing can scroll.
#[inline]
pub fn scroll_fraction(metrics: &ScrollMetrics) -> f64 {
    let max = metrics.scroll_height - metrics.client_height;
    if !(max > 0.0) {
        return 0.0;
    }
    (metrics.scroll_y / max).clamp(0.0, 1.0)
}

pub struct ProgressIndicator<N> {
    bar: N,
}

impl<N: Clone + PartialEq> ProgressIndicator<N> {
    pub fn attach<S: Surface<Node = N>>(
        surface: &S,
        selectors: &Selectors,
    ) -> Result<Self, AttachError> {
        let bar = surface
            .by_id(selectors.progress_id)
            .ok_or(AttachError::MissingElement(selectors.progress_id))?;
        Ok(Self { bar })
    }

    pub fn update<S: Surface<Node = N>>(&self, surface: &S) {
        let pct = scroll_fraction(&surface.metrics()) * 100.0;
        surface.set_style(&self.bar, "width", &format!("{pct}%"));
    }

    pub fn detach<S: Surface<Node = N>>(self, surface: &S) {
        surface.clear_style(&self.bar, "width");
    }
}
