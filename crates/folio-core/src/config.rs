use crate::constants::*;
use crate::intersection::TriggerBand;
use crate::sparkle::BurstShape;

/// Tunables for every page behavior.
#[derive(Clone, Debug)]
pub struct PageConfig {
    pub nav_band: TriggerBand,
    pub reveal_band: TriggerBand,
    pub stagger_step_ms: u32,
    pub cursor_smoothing: f64,
    pub burst: BurstShape,
    pub hover_burst: usize,
    pub click_burst: usize,
    pub tilt_strength_deg: f64,
    pub drift_ratio: f64,
    pub drift_cap_px: f64,
    pub to_top_threshold_px: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_band: TriggerBand::navigation(),
            reveal_band: TriggerBand::reveal(),
            stagger_step_ms: STAGGER_STEP_MS,
            cursor_smoothing: CURSOR_SMOOTHING,
            burst: BurstShape::default(),
            hover_burst: BURST_HOVER_COUNT,
            click_burst: BURST_CLICK_COUNT,
            tilt_strength_deg: TILT_STRENGTH_DEG,
            drift_ratio: DRIFT_RATIO,
            drift_cap_px: DRIFT_CAP_PX,
            to_top_threshold_px: TO_TOP_THRESHOLD_PX,
        }
    }
}

/// Names of the elements, classes and attributes the page markup provides.
#[derive(Clone, Debug)]
pub struct Selectors {
    pub sections: &'static str,
    pub nav_links: &'static str,
    pub nav_href_attr: &'static str,
    pub nav_active_class: &'static str,
    pub reveal: &'static str,
    pub stagger_attr: &'static str,
    pub visible_class: &'static str,
    pub stagger_child_class: &'static str,
    pub progress_id: &'static str,
    pub cursor_id: &'static str,
    pub sparkle_hover: &'static str,
    pub sparkle_click: &'static str,
    pub particle_class: &'static str,
    pub avatar_id: &'static str,
    pub hero_text_id: &'static str,
    pub to_top_id: &'static str,
    pub to_top_visible_class: &'static str,
    pub year_id: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            sections: "section[id]",
            nav_links: "a[data-nav]",
            nav_href_attr: "href",
            nav_active_class: "is-active",
            reveal: ".reveal",
            stagger_attr: "data-stagger",
            visible_class: "is-visible",
            stagger_child_class: "stagger-child",
            progress_id: "progress",
            cursor_id: "cursor-friend",
            sparkle_hover: ".sparkle-target",
            sparkle_click: ".confetti-target",
            particle_class: "sparkle",
            avatar_id: "avatarWrap",
            hero_text_id: "heroText",
            to_top_id: "toTop",
            to_top_visible_class: "is-visible",
            year_id: "year",
        }
    }
}
