//! Platform-free controllers for the portfolio page effects.
//!
//! Every component reads and writes the page through [`Surface`], so the same
//! code drives the live DOM (see the `folio-web` crate) and the in-memory
//! [`MockPage`] used by the host tests.

pub mod config;
pub mod constants;
pub mod cursor;
pub mod drift;
pub mod error;
pub mod intersection;
pub mod mock;
pub mod nav;
pub mod portfolio;
pub mod progress;
pub mod reveal;
pub mod schedule;
pub mod sparkle;
pub mod surface;
pub mod tilt;
pub mod to_top;
pub mod year;

pub use config::{PageConfig, Selectors};
pub use error::AttachError;
pub use intersection::{IntersectionEntry, IntersectionWatcher, Inset, Length, TriggerBand};
pub use mock::{MockNode, MockPage};
pub use portfolio::Portfolio;
pub use schedule::{CancelHandle, ManualClock};
pub use surface::{Rect, ScrollMetrics, Surface};
