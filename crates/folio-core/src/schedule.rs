//! Cancellation for the per-frame loop.

use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag for a repeating task. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Rc<Cell<bool>>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Host-side frame driver: runs a step per frame until the handle is
/// cancelled, the way `requestAnimationFrame` re-schedules in the browser.
#[derive(Debug)]
pub struct ManualClock {
    handle: CancelHandle,
    frames: u64,
}

impl ManualClock {
    pub fn new(handle: CancelHandle) -> Self {
        Self { handle, frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs up to `frames` steps; returns how many actually ran.
    pub fn advance(&mut self, frames: usize, mut step: impl FnMut()) -> usize {
        let mut ran = 0;
        for _ in 0..frames {
            if self.handle.is_cancelled() {
                break;
            }
            step();
            ran += 1;
        }
        self.frames += ran as u64;
        ran
    }
}
