//! Viewport intersection: trigger bands and a geometric watcher.
//!
//! In the browser the native `IntersectionObserver` does the work and only the
//! [`TriggerBand`] is shared with it. [`IntersectionWatcher`] computes the same
//! entries from element boxes, for hosts without an observer.

use crate::constants::{
    NAV_BAND_BOTTOM_PCT, NAV_BAND_THRESHOLD, NAV_BAND_TOP_PCT, REVEAL_THRESHOLD,
};
use crate::surface::{Rect, ScrollMetrics, Surface};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    /// Absolute length given the size of the axis it applies to.
    #[inline]
    pub fn resolve(self, basis: f64) -> f64 {
        match self {
            Length::Px(v) => v,
            Length::Percent(p) => basis * p / 100.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{v}px"),
            Length::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// Per-edge growth of the viewport box; negative values shrink it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inset {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl Inset {
    pub const ZERO: Inset = Inset {
        top: Length::Px(0.0),
        right: Length::Px(0.0),
        bottom: Length::Px(0.0),
        left: Length::Px(0.0),
    };

    /// `rootMargin` syntax, top/right/bottom/left.
    pub fn css(&self) -> String {
        format!("{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// The region of the viewport a target has to reach, and how much of the
/// target must be inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerBand {
    pub margin: Inset,
    pub threshold: f64,
}

impl TriggerBand {
    /// Narrow strip just above the vertical middle of the viewport.
    pub fn navigation() -> Self {
        Self {
            margin: Inset {
                top: Length::Percent(NAV_BAND_TOP_PCT),
                bottom: Length::Percent(NAV_BAND_BOTTOM_PCT),
                ..Inset::ZERO
            },
            threshold: NAV_BAND_THRESHOLD,
        }
    }

    /// Whole viewport, triggered once a small slice of the target shows.
    pub fn reveal() -> Self {
        Self {
            margin: Inset::ZERO,
            threshold: REVEAL_THRESHOLD,
        }
    }

    /// The band in viewport coordinates.
    pub fn root_rect(&self, metrics: &ScrollMetrics) -> Rect {
        let (w, h) = (metrics.viewport_width, metrics.viewport_height);
        let left = -self.margin.left.resolve(w);
        let top = -self.margin.top.resolve(h);
        let right = w + self.margin.right.resolve(w);
        let bottom = h + self.margin.bottom.resolve(h);
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Whether `target` counts as intersecting, and its visible ratio.
    pub fn evaluate(&self, target: Rect, metrics: &ScrollMetrics) -> (bool, f64) {
        let root = self.root_rect(metrics);
        let overlap_w = target.right().min(root.right()) - target.left.max(root.left);
        let overlap_h = target.bottom().min(root.bottom()) - target.top.max(root.top);
        // edge contact counts as intersecting, like the browser
        let touching = overlap_w >= 0.0 && overlap_h >= 0.0;
        let area = target.width * target.height;
        let ratio = match (touching, area > 0.0) {
            (false, _) => 0.0,
            (true, true) => (overlap_w * overlap_h / area).clamp(0.0, 1.0),
            (true, false) => 1.0,
        };
        let intersecting = if self.threshold <= 0.0 {
            touching
        } else {
            touching && ratio >= self.threshold
        };
        (intersecting, ratio)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<N> {
    pub target: N,
    pub is_intersecting: bool,
    pub ratio: f64,
}

struct Tracked<N> {
    node: N,
    // None until the first report
    intersecting: Option<bool>,
}

/// Geometric stand-in for `IntersectionObserver`.
///
/// A newly observed target is reported on the next [`poll`](Self::poll);
/// afterwards only status changes are reported, in observation order.
pub struct IntersectionWatcher<N> {
    band: TriggerBand,
    targets: Vec<Tracked<N>>,
}

impl<N: Clone + PartialEq> IntersectionWatcher<N> {
    pub fn new(band: TriggerBand) -> Self {
        Self {
            band,
            targets: Vec::new(),
        }
    }

    pub fn band(&self) -> &TriggerBand {
        &self.band
    }

    pub fn observe(&mut self, node: N) {
        if self.targets.iter().any(|t| t.node == node) {
            return;
        }
        self.targets.push(Tracked {
            node,
            intersecting: None,
        });
    }

    pub fn unobserve(&mut self, node: &N) {
        self.targets.retain(|t| &t.node != node);
    }

    pub fn observed(&self) -> usize {
        self.targets.len()
    }

    pub fn poll<S: Surface<Node = N>>(&mut self, surface: &S) -> Vec<IntersectionEntry<N>> {
        let metrics = surface.metrics();
        let mut entries = Vec::new();
        for tracked in &mut self.targets {
            let (intersecting, ratio) = self.band.evaluate(surface.rect(&tracked.node), &metrics);
            if tracked.intersecting == Some(intersecting) {
                continue;
            }
            tracked.intersecting = Some(intersecting);
            entries.push(IntersectionEntry {
                target: tracked.node.clone(),
                is_intersecting: intersecting,
                ratio,
            });
        }
        entries
    }
}
