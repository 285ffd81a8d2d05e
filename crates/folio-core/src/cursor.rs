//! Decorative element that trails the pointer.

use crate::config::{PageConfig, Selectors};
use crate::error::AttachError;
use crate::schedule::CancelHandle;
use crate::surface::Surface;
use glam::DVec2;

/// Moves `current` a fixed fraction of the way to `target` on each axis.
#[inline]
pub fn follow_step(current: DVec2, target: DVec2, factor: f64) -> DVec2 {
    current + (target - current) * factor
}

pub struct CursorFollower<N> {
    node: N,
    current: DVec2,
    target: DVec2,
    factor: f64,
    cancel: CancelHandle,
}

impl<N: Clone + PartialEq> CursorFollower<N> {
    /// Starts at the viewport center, at rest.
    pub fn attach<S: Surface<Node = N>>(
        surface: &S,
        selectors: &Selectors,
        config: &PageConfig,
    ) -> Result<Self, AttachError> {
        let node = surface
            .by_id(selectors.cursor_id)
            .ok_or(AttachError::MissingElement(selectors.cursor_id))?;
        let m = surface.metrics();
        let center = DVec2::new(m.viewport_width / 2.0, m.viewport_height / 2.0);
        Ok(Self {
            node,
            current: center,
            target: center,
            factor: config.cursor_smoothing,
            cancel: CancelHandle::new(),
        })
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = DVec2::new(x, y);
    }

    pub fn position(&self) -> DVec2 {
        self.current
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// One frame of smoothing. Returns `false` once the loop was cancelled.
    pub fn tick<S: Surface<Node = N>>(&mut self, surface: &S) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        self.current = follow_step(self.current, self.target, self.factor);
        surface.set_style(&self.node, "left", &format!("{}px", self.current.x));
        surface.set_style(&self.node, "top", &format!("{}px", self.current.y));
        true
    }

    pub fn detach(self) {
        self.cancel.cancel();
    }
}
