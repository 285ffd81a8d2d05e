//! Composition root: one controller per behavior, each optional.

use crate::config::{PageConfig, Selectors};
use crate::cursor::CursorFollower;
use crate::drift::HeroDrift;
use crate::error::AttachError;
use crate::intersection::IntersectionEntry;
use crate::nav::NavHighlighter;
use crate::progress::ProgressIndicator;
use crate::reveal::RevealAnimator;
use crate::sparkle::SparkleEmitter;
use crate::surface::Surface;
use crate::tilt::AvatarTilt;
use crate::to_top::BackToTop;
use rand::Rng;

pub struct Portfolio<N, R> {
    pub nav: Option<NavHighlighter<N>>,
    pub reveal: Option<RevealAnimator<N>>,
    pub progress: Option<ProgressIndicator<N>>,
    pub cursor: Option<CursorFollower<N>>,
    pub sparkles: Option<SparkleEmitter<N, R>>,
    pub tilt: Option<AvatarTilt<N>>,
    pub drift: Option<HeroDrift<N>>,
    pub to_top: Option<BackToTop<N>>,
}

fn enable<T>(name: &str, attached: Result<T, AttachError>) -> Option<T> {
    match attached {
        Ok(c) => Some(c),
        Err(e) => {
            log::debug!("[{}] disabled: {}", name, e);
            None
        }
    }
}

impl<N: Clone + PartialEq + 'static, R: Rng> Portfolio<N, R> {
    /// Binds every behavior whose elements exist, then renders the
    /// scroll-driven ones once for the initial position.
    pub fn attach<S: Surface<Node = N>>(
        surface: &S,
        config: &PageConfig,
        selectors: &Selectors,
        rng: R,
    ) -> Self {
        let page = Self {
            nav: enable("nav", NavHighlighter::attach(surface, selectors)),
            reveal: enable("reveal", RevealAnimator::attach(surface, selectors, config)),
            progress: enable("progress", ProgressIndicator::attach(surface, selectors)),
            cursor: enable("cursor", CursorFollower::attach(surface, selectors, config)),
            sparkles: enable(
                "sparkle",
                SparkleEmitter::attach(surface, selectors, config, rng),
            ),
            tilt: enable("tilt", AvatarTilt::attach(surface, selectors, config)),
            drift: enable("drift", HeroDrift::attach(surface, selectors, config)),
            to_top: enable("to-top", BackToTop::attach(surface, selectors, config)),
        };
        page.on_scroll(surface);
        log::info!("[page] {} of 8 behaviors attached", page.attached_count());
        page
    }

    pub fn attached_count(&self) -> usize {
        [
            self.nav.is_some(),
            self.reveal.is_some(),
            self.progress.is_some(),
            self.cursor.is_some(),
            self.sparkles.is_some(),
            self.tilt.is_some(),
            self.drift.is_some(),
            self.to_top.is_some(),
        ]
        .iter()
        .filter(|on| **on)
        .count()
    }

    pub fn on_scroll<S: Surface<Node = N>>(&self, surface: &S) {
        if let Some(p) = &self.progress {
            p.update(surface);
        }
        if let Some(d) = &self.drift {
            d.update(surface);
        }
        if let Some(t) = &self.to_top {
            t.update(surface);
        }
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) {
        if let Some(c) = &mut self.cursor {
            c.set_target(client_x, client_y);
        }
    }

    /// Returns `false` when there is no frame work left to schedule.
    pub fn on_frame<S: Surface<Node = N>>(&mut self, surface: &S) -> bool {
        match &mut self.cursor {
            Some(c) => c.tick(surface),
            None => false,
        }
    }

    pub fn on_nav_entries<S: Surface<Node = N>>(
        &mut self,
        surface: &S,
        entries: &[IntersectionEntry<N>],
    ) {
        if let Some(nav) = &mut self.nav {
            nav.on_entries(surface, entries);
        }
    }

    /// Returns the targets the reveal watcher should drop.
    pub fn on_reveal_entries<S: Surface<Node = N>>(
        &mut self,
        surface: &S,
        entries: &[IntersectionEntry<N>],
    ) -> Vec<N> {
        match &mut self.reveal {
            Some(r) => r.on_entries(surface, entries),
            None => Vec::new(),
        }
    }

    pub fn on_avatar_move<S: Surface<Node = N>>(&self, surface: &S, client_x: f64, client_y: f64) {
        if let Some(t) = &self.tilt {
            t.on_move(surface, client_x, client_y);
        }
    }

    pub fn on_avatar_leave<S: Surface<Node = N>>(&self, surface: &S) {
        if let Some(t) = &self.tilt {
            t.on_leave(surface);
        }
    }

    pub fn on_sparkle_hover<S: Surface<Node = N>>(&mut self, surface: &S, trigger: &N) -> Vec<N> {
        match &mut self.sparkles {
            Some(s) => s.on_hover(surface, trigger),
            None => Vec::new(),
        }
    }

    pub fn on_confetti_click<S: Surface<Node = N>>(&mut self, surface: &S, trigger: &N) -> Vec<N> {
        match &mut self.sparkles {
            Some(s) => s.on_click(surface, trigger),
            None => Vec::new(),
        }
    }

    pub fn on_to_top_click<S: Surface<Node = N>>(&self, surface: &S) {
        if let Some(t) = &self.to_top {
            t.activate(surface);
        }
    }

    /// Stops the frame loop and clears the inline state each behavior owns.
    /// Revealed elements keep their revealed state.
    pub fn detach<S: Surface<Node = N>>(self, surface: &S) {
        if let Some(nav) = self.nav {
            nav.detach(surface);
        }
        if let Some(r) = self.reveal {
            r.detach();
        }
        if let Some(p) = self.progress {
            p.detach(surface);
        }
        if let Some(c) = self.cursor {
            c.detach();
        }
        if let Some(t) = self.tilt {
            t.detach(surface);
        }
        if let Some(d) = self.drift {
            d.detach(surface);
        }
        if let Some(t) = self.to_top {
            t.detach(surface);
        }
        log::info!("[page] detached");
    }
}
