// Tuning values shared by the page controllers.

// Navigation trigger band: a thin strip just above the vertical middle
pub const NAV_BAND_TOP_PCT: f64 = -40.0; // shrink from the top edge
pub const NAV_BAND_BOTTOM_PCT: f64 = -55.0; // shrink from the bottom edge
pub const NAV_BAND_THRESHOLD: f64 = 0.0;

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.12; // visible fraction that triggers the entrance
pub const STAGGER_STEP_MS: u32 = 90; // delay added per staggered child

// Cursor companion
pub const CURSOR_SMOOTHING: f64 = 0.12; // fraction of the remaining distance per frame

// Particle bursts
pub const BURST_HOVER_COUNT: usize = 12;
pub const BURST_CLICK_COUNT: usize = 8; // fewer so the burst does not cover the link
pub const BURST_DISTANCE_MIN: f64 = 40.0;
pub const BURST_DISTANCE_SPAN: f64 = 36.0;
pub const BURST_UPWARD_BIAS: f64 = 10.0;

// Avatar tilt, degrees at full offset
pub const TILT_STRENGTH_DEG: f64 = 10.0;

// Hero drift
pub const DRIFT_RATIO: f64 = 0.05;
pub const DRIFT_CAP_PX: f64 = 12.0;

// Back-to-top
pub const TO_TOP_THRESHOLD_PX: f64 = 600.0;
