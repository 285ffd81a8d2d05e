// Host-side tests for the scroll-driven behaviors: progress bar, hero drift
// and the back-to-top control.

use folio_core::drift::{drift_offset, HeroDrift};
use folio_core::progress::{scroll_fraction, ProgressIndicator};
use folio_core::to_top::{should_show, BackToTop};
use folio_core::{MockNode, MockPage, PageConfig, ScrollMetrics, Selectors, Surface};

fn metrics(scroll_y: f64, scroll_height: f64, client_height: f64) -> ScrollMetrics {
    ScrollMetrics {
        viewport_width: 1000.0,
        viewport_height: client_height,
        scroll_y,
        scroll_height,
        client_height,
        ..Default::default()
    }
}

fn page_with(id: &str) -> (MockPage, MockNode) {
    let page = MockPage::new(1000.0, 800.0);
    page.set_scroll_height(2800.0);
    let el = page.append(page.body(), "div");
    page.set_attr(el, "id", id);
    (page, el)
}

fn indicator(page: &MockPage) -> ProgressIndicator<MockNode> {
    let selectors = Selectors::default();
    ProgressIndicator::attach(page, &selectors).unwrap()
}

fn hero_drift(page: &MockPage) -> HeroDrift<MockNode> {
    let (selectors, config) = (Selectors::default(), PageConfig::default());
    HeroDrift::attach(page, &selectors, &config).unwrap()
}

fn back_to_top(page: &MockPage) -> BackToTop<MockNode> {
    let (selectors, config) = (Selectors::default(), PageConfig::default());
    BackToTop::attach(page, &selectors, &config).unwrap()
}

#[test]
fn fraction_tracks_scroll_offset() {
    let max = 2000.0;
    let mut s = 0.0;
    while s <= max {
        let f = scroll_fraction(&metrics(s, 2800.0, 800.0));
        assert_eq!(f * 100.0, (s / max) * 100.0, "offset {s}");
        s += 37.5;
    }
    assert_eq!(scroll_fraction(&metrics(max, 2800.0, 800.0)), 1.0);
}

#[test]
fn fraction_is_zero_without_scroll_range() {
    assert_eq!(scroll_fraction(&metrics(0.0, 800.0, 800.0)), 0.0);
    // content shorter than the viewport
    assert_eq!(scroll_fraction(&metrics(0.0, 600.0, 800.0)), 0.0);
}

#[test]
fn fraction_is_clamped() {
    // rubber-band overscroll on either end
    assert_eq!(scroll_fraction(&metrics(-40.0, 2800.0, 800.0)), 0.0);
    assert_eq!(scroll_fraction(&metrics(2100.0, 2800.0, 800.0)), 1.0);
}

#[test]
fn progress_bar_width_follows_scroll() {
    let (page, bar) = page_with("progress");
    let progress = indicator(&page);

    progress.update(&page);
    assert_eq!(page.style(bar, "width").as_deref(), Some("0%"));

    page.set_scroll(1000.0);
    progress.update(&page);
    assert_eq!(page.style(bar, "width").as_deref(), Some("50%"));

    page.set_scroll(2000.0);
    progress.update(&page);
    assert_eq!(page.style(bar, "width").as_deref(), Some("100%"));

    progress.detach(&page);
    assert_eq!(page.style(bar, "width"), None);
}

#[test]
fn progress_on_unscrollable_page_is_zero() {
    let (page, bar) = page_with("progress");
    page.set_scroll_height(800.0);
    let progress = indicator(&page);
    progress.update(&page);
    assert_eq!(page.style(bar, "width").as_deref(), Some("0%"));
}

#[test]
fn drift_is_capped() {
    assert_eq!(drift_offset(0.0, 0.05, 12.0), 0.0);
    assert_eq!(drift_offset(100.0, 0.05, 12.0), 5.0);
    assert_eq!(drift_offset(240.0, 0.05, 12.0), 12.0);
    for y in [241.0, 1_000.0, 1e9, f64::MAX] {
        assert!(drift_offset(y, 0.05, 12.0) <= 12.0);
    }
}

#[test]
fn drift_is_monotonic_up_to_cap() {
    let mut prev = drift_offset(0.0, 0.05, 12.0);
    for i in 1..400 {
        let d = drift_offset(i as f64, 0.05, 12.0);
        assert!(d >= prev);
        prev = d;
    }
}

#[test]
fn hero_text_shifts_down() {
    let (page, hero) = page_with("heroText");
    let drift = hero_drift(&page);

    page.set_scroll(100.0);
    drift.update(&page);
    let shift = page.style(hero, "transform");
    assert_eq!(shift.as_deref(), Some("translateY(5px)"));

    page.set_scroll(5000.0);
    drift.update(&page);
    let shift = page.style(hero, "transform");
    assert_eq!(shift.as_deref(), Some("translateY(12px)"));
}

#[test]
fn to_top_threshold_is_exclusive() {
    assert!(!should_show(0.0, 600.0));
    assert!(!should_show(600.0, 600.0));
    assert!(should_show(600.5, 600.0));
    assert!(should_show(601.0, 600.0));
}

#[test]
fn to_top_toggles_with_scroll() {
    let (page, button) = page_with("toTop");
    let to_top = back_to_top(&page);

    let cases = [
        (0.0, false),
        (601.0, true),
        (1500.0, true),
        (600.0, false),
        (599.0, false),
    ];
    for (y, visible) in cases {
        page.set_scroll(y);
        to_top.update(&page);
        assert_eq!(page.has_class(&button, "is-visible"), visible, "scroll {y}");
    }
}

#[test]
fn to_top_activation_scrolls_to_zero() {
    let (page, _) = page_with("toTop");
    let to_top = back_to_top(&page);
    page.set_scroll(1800.0);

    to_top.activate(&page);
    assert_eq!(page.scroll_requests(), 1);
    assert_eq!(page.metrics().scroll_y, 0.0);

    to_top.update(&page);
    assert!(!page.has_class(to_top.node(), "is-visible"));
}

#[test]
fn missing_elements_are_reported() {
    let page = MockPage::new(800.0, 600.0);
    let selectors = Selectors::default();
    let config = PageConfig::default();
    assert!(ProgressIndicator::attach(&page, &selectors).is_err());
    assert!(HeroDrift::attach(&page, &selectors, &config).is_err());
    assert!(BackToTop::attach(&page, &selectors, &config).is_err());
}
