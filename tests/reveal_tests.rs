// Host-side tests for one-shot reveal animations.

use folio_core::reveal::{stagger_delay_ms, RevealAnimator};
use folio_core::{
    IntersectionEntry, IntersectionWatcher, MockNode, MockPage, PageConfig, Rect, Selectors,
    Surface,
};

struct RevealPage {
    page: MockPage,
    card_list: MockNode,
    cards: Vec<MockNode>,
    plain: MockNode,
}

fn reveal_page() -> RevealPage {
    let page = MockPage::new(1000.0, 800.0);
    page.set_scroll_height(4000.0);

    let card_list = page.append(page.body(), "div");
    page.set_attr(card_list, "class", "reveal grid");
    page.set_attr(card_list, "data-stagger", ".card");
    page.set_layout(card_list, Rect::new(0.0, 1200.0, 1000.0, 400.0));
    let cards = (0..4)
        .map(|_| {
            let c = page.append(card_list, "article");
            page.set_attr(c, "class", "card");
            c
        })
        .collect();
    // not part of the stagger selector
    let note = page.append(card_list, "p");
    page.set_attr(note, "class", "note");

    let plain = page.append(page.body(), "div");
    page.set_attr(plain, "class", "reveal");
    page.set_layout(plain, Rect::new(0.0, 100.0, 1000.0, 300.0));

    RevealPage {
        page,
        card_list,
        cards,
        plain,
    }
}

fn attach(p: &RevealPage) -> RevealAnimator<MockNode> {
    let attached = RevealAnimator::attach(&p.page, &Selectors::default(), &PageConfig::default());
    attached.unwrap()
}

fn watch(animator: &RevealAnimator<MockNode>) -> IntersectionWatcher<MockNode> {
    let mut watcher = IntersectionWatcher::new(PageConfig::default().reveal_band);
    for t in animator.targets() {
        watcher.observe(*t);
    }
    watcher
}

fn scroll_and_apply(
    p: &RevealPage,
    animator: &mut RevealAnimator<MockNode>,
    watcher: &mut IntersectionWatcher<MockNode>,
    y: f64,
) {
    p.page.set_scroll(y);
    let entries = watcher.poll(&p.page);
    for done in animator.on_entries(&p.page, &entries) {
        watcher.unobserve(&done);
    }
}

#[test]
fn stagger_delays_increase_by_step() {
    let delays: Vec<u64> = (0..5).map(|i| stagger_delay_ms(i, 90)).collect();
    assert_eq!(delays, vec![0, 90, 180, 270, 360]);
    assert!(delays.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn element_in_view_at_load_is_revealed() {
    let p = reveal_page();
    let mut animator = attach(&p);
    let mut watcher = watch(&animator);

    scroll_and_apply(&p, &mut animator, &mut watcher, 0.0);
    assert!(p.page.has_class(&p.plain, "is-visible"));
    assert!(!p.page.has_class(&p.card_list, "is-visible"));
    assert_eq!(watcher.observed(), 1);
}

#[test]
fn reveal_waits_for_threshold() {
    let p = reveal_page();
    let mut animator = attach(&p);
    let mut watcher = watch(&animator);

    // 40 of 400px visible: below 12%
    scroll_and_apply(&p, &mut animator, &mut watcher, 440.0);
    assert!(!animator.is_revealed(&p.card_list));

    // 60 of 400px visible
    scroll_and_apply(&p, &mut animator, &mut watcher, 460.0);
    assert!(animator.is_revealed(&p.card_list));
    assert!(p.page.has_class(&p.card_list, "is-visible"));
}

#[test]
fn staggered_children_get_increasing_delays_in_document_order() {
    let p = reveal_page();
    let mut animator = attach(&p);
    let mut watcher = watch(&animator);

    scroll_and_apply(&p, &mut animator, &mut watcher, 800.0);
    for (i, card) in p.cards.iter().enumerate() {
        assert!(p.page.has_class(card, "stagger-child"));
        assert_eq!(
            p.page.style(*card, "animation-delay"),
            Some(format!("{}ms", i * 90))
        );
    }
    let note = p.page.query_all(Some(&p.card_list), ".note")[0];
    assert!(!p.page.has_class(&note, "stagger-child"));
    assert_eq!(p.page.style(note, "animation-delay"), None);
}

#[test]
fn reveal_happens_once_despite_reentry() {
    let p = reveal_page();
    let mut animator = attach(&p);
    let mut watcher = watch(&animator);

    scroll_and_apply(&p, &mut animator, &mut watcher, 800.0);
    // only the element above the fold is still watched
    assert_eq!(watcher.observed(), 1);

    // leave the viewport and come back
    for y in [0.0, 2000.0, 800.0] {
        scroll_and_apply(&p, &mut animator, &mut watcher, y);
    }
    assert!(p.page.has_class(&p.card_list, "is-visible"));

    // a late entry for an already revealed element is ignored
    p.page.set_style(&p.cards[0], "animation-delay", "untouched");
    let late = IntersectionEntry {
        target: p.card_list,
        is_intersecting: true,
        ratio: 1.0,
    };
    let done = animator.on_entries(&p.page, &[late.clone(), late]);
    assert!(done.is_empty());
    assert_eq!(
        p.page.style(p.cards[0], "animation-delay").as_deref(),
        Some("untouched")
    );
}

#[test]
fn duplicate_entries_in_one_batch_reveal_once() {
    let p = reveal_page();
    let mut animator = attach(&p);
    let e = IntersectionEntry {
        target: p.plain,
        is_intersecting: true,
        ratio: 0.5,
    };
    let done = animator.on_entries(&p.page, &[e.clone(), e]);
    assert_eq!(done, vec![p.plain]);
}

#[test]
fn empty_stagger_attribute_is_ignored() {
    let p = reveal_page();
    p.page.set_attr(p.card_list, "data-stagger", "  ");
    let mut animator = attach(&p);
    let e = IntersectionEntry {
        target: p.card_list,
        is_intersecting: true,
        ratio: 1.0,
    };
    animator.on_entries(&p.page, &[e]);
    assert!(p.page.has_class(&p.card_list, "is-visible"));
    for card in &p.cards {
        assert!(!p.page.has_class(card, "stagger-child"));
    }
}

#[test]
fn detach_keeps_revealed_state() {
    let p = reveal_page();
    let mut animator = attach(&p);
    let mut watcher = watch(&animator);
    scroll_and_apply(&p, &mut animator, &mut watcher, 0.0);

    animator.detach();
    assert!(p.page.has_class(&p.plain, "is-visible"));
}

#[test]
fn entry_below_threshold_is_not_revealed() {
    let p = reveal_page();
    let mut animator = attach(&p);
    let barely = IntersectionEntry {
        target: p.card_list,
        is_intersecting: true,
        ratio: 0.05,
    };
    assert!(animator.on_entries(&p.page, &[barely]).is_empty());
    assert!(!animator.is_revealed(&p.card_list));
    assert!(!p.page.has_class(&p.card_list, "is-visible"));

    let enough = IntersectionEntry {
        target: p.card_list,
        is_intersecting: true,
        ratio: 0.12,
    };
    assert_eq!(animator.on_entries(&p.page, &[enough]), vec![p.card_list]);
    assert!(p.page.has_class(&p.card_list, "is-visible"));
}
