//! One-shot entrance animations with optional staggered children.

use crate::config::{PageConfig, Selectors};
use crate::error::AttachError;
use crate::intersection::IntersectionEntry;
use crate::surface::Surface;

/// Entrance delay of the `index`-th staggered child.
#[inline]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u64 {
    index as u64 * u64::from(step_ms)
}

pub struct RevealAnimator<N> {
    targets: Vec<N>,
    revealed: Vec<N>,
    threshold: f64,
    step_ms: u32,
    stagger_attr: &'static str,
    visible_class: &'static str,
    child_class: &'static str,
}

impl<N: Clone + PartialEq> RevealAnimator<N> {
    pub fn attach<S: Surface<Node = N>>(
        surface: &S,
        selectors: &Selectors,
        config: &PageConfig,
    ) -> Result<Self, AttachError> {
        let targets = surface.query_all(None, selectors.reveal);
        if targets.is_empty() {
            return Err(AttachError::NoTargets(selectors.reveal));
        }
        log::debug!("[reveal] watching {} elements", targets.len());
        Ok(Self {
            targets,
            revealed: Vec::new(),
            threshold: config.reveal_band.threshold,
            step_ms: config.stagger_step_ms,
            stagger_attr: selectors.stagger_attr,
            visible_class: selectors.visible_class,
            child_class: selectors.stagger_child_class,
        })
    }

    pub fn targets(&self) -> &[N] {
        &self.targets
    }

    pub fn is_revealed(&self, node: &N) -> bool {
        self.revealed.contains(node)
    }

    /// Reveals every target that reaches the visibility threshold and returns
    /// the ones that should no longer be watched.
    ///
    /// The browser flags an entry as intersecting on the first overlapping
    /// pixel, so the ratio is checked here as well.
    pub fn on_entries<S: Surface<Node = N>>(
        &mut self,
        surface: &S,
        entries: &[IntersectionEntry<N>],
    ) -> Vec<N> {
        let mut done = Vec::new();
        for entry in entries {
            if !self.reaches_threshold(entry) || self.is_revealed(&entry.target) {
                continue;
            }
            self.reveal(surface, &entry.target);
            self.revealed.push(entry.target.clone());
            done.push(entry.target.clone());
        }
        done
    }

    fn reaches_threshold(&self, entry: &IntersectionEntry<N>) -> bool {
        entry.is_intersecting && entry.ratio >= self.threshold
    }

    fn reveal<S: Surface<Node = N>>(&self, surface: &S, node: &N) {
        surface.add_class(node, self.visible_class);
        let Some(selector) = surface
            .attribute(node, self.stagger_attr)
            .filter(|s| !s.trim().is_empty())
        else {
            return;
        };
        let kids = surface.query_all(Some(node), &selector);
        log::trace!(
            "[reveal] staggering {} children of `{}`",
            kids.len(),
            selector
        );
        for (i, kid) in kids.iter().enumerate() {
            surface.add_class(kid, self.child_class);
            surface.set_style(
                kid,
                "animation-delay",
                &format!("{}ms", stagger_delay_ms(i, self.step_ms)),
            );
        }
    }

    /// Stops watching. Revealed elements stay revealed.
    pub fn detach(self) {
        log::debug!(
            "[reveal] detached, {} of {} revealed",
            self.revealed.len(),
            self.targets.len()
        );
    }
}
