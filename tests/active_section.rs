use std::cell::Cell;

use folio::tracker::{ActiveSectionTracker, LayoutProbe, LayoutSnapshot, SectionExtent};
use folio::Content;

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Three stacked sections, 600 units each, starting at `top`.
fn abc_layout(top: f64) -> LayoutSnapshot {
    LayoutSnapshot::new(0.0)
        .with_section("a", top, 600.0)
        .with_section("b", top + 600.0, 600.0)
        .with_section("c", top + 1200.0, 600.0)
}

/// Converts an anchor into the scroll offset that produces it.
fn scroll_for(tracker: &ActiveSectionTracker, anchor: f64) -> f64 {
    anchor - tracker.lookahead()
}

#[test]
fn anchor_inside_middle_section_selects_it() {
    let mut tracker = ActiveSectionTracker::new(ids(&["a", "b", "c"]), None);
    let layout = abc_layout(0.0);

    let changed = tracker.on_scroll(scroll_for(&tracker, 900.0), &layout);
    assert_eq!(changed.map(String::as_str), Some("b"));
    assert_eq!(tracker.active(), Some("b"));
}

#[test]
fn increasing_anchors_never_move_backwards() {
    let mut tracker = ActiveSectionTracker::new(ids(&["a", "b", "c"]), None);
    let layout = abc_layout(50.0);

    let mut last_index = 0;
    let mut anchor = 50.0;
    while anchor < 1850.0 {
        tracker.on_scroll(scroll_for(&tracker, anchor), &layout);
        let index = tracker
            .active()
            .and_then(|id| tracker.position_of(id))
            .expect("a section is always active");
        assert!(
            index >= last_index,
            "anchor {} moved selection back from {} to {}",
            anchor,
            last_index,
            index
        );
        last_index = index;
        anchor += 37.0;
    }
    assert_eq!(tracker.active(), Some("c"));
}

#[test]
fn anchor_above_first_section_keeps_default() {
    let mut tracker = ActiveSectionTracker::new(ids(&["home", "about"]), Some("home"));
    let layout = LayoutSnapshot::new(0.0)
        .with_section("home", 400.0, 800.0)
        .with_section("about", 1200.0, 800.0);

    assert!(tracker.on_scroll(0.0, &layout).is_none());
    assert_eq!(tracker.active(), Some("home"));
}

#[test]
fn home_about_scenario() {
    let mut tracker = ActiveSectionTracker::new(ids(&["home", "about"]), None);
    let layout = LayoutSnapshot::new(0.0)
        .with_section("home", 0.0, 800.0)
        .with_section("about", 800.0, 800.0);

    tracker.on_scroll(scroll_for(&tracker, 850.0), &layout);
    assert_eq!(tracker.active(), Some("about"));

    tracker.on_scroll(scroll_for(&tracker, 400.0), &layout);
    assert_eq!(tracker.active(), Some("home"));

    tracker.on_scroll(scroll_for(&tracker, 850.0), &layout);
    tracker.on_scroll(scroll_for(&tracker, 1700.0), &layout);
    assert_eq!(tracker.active(), Some("about"));
}

#[test]
fn unmounted_section_is_skipped() {
    let mut tracker = ActiveSectionTracker::new(ids(&["home", "about", "contact"]), None);
    // "about" has no element; its would-be range falls through to nothing.
    let layout = LayoutSnapshot::new(0.0)
        .with_section("home", 0.0, 800.0)
        .with_section("contact", 1600.0, 800.0);

    assert!(tracker.on_scroll(scroll_for(&tracker, 1000.0), &layout).is_none());
    assert_eq!(tracker.active(), Some("home"));

    tracker.on_scroll(scroll_for(&tracker, 1700.0), &layout);
    assert_eq!(tracker.active(), Some("contact"));
}

#[test]
fn rapid_scroll_lands_on_final_position() {
    let mut tracker = ActiveSectionTracker::new(ids(&["a", "b", "c"]), None);
    let layout = abc_layout(0.0);

    // A single notification jumping straight from the top to the last section.
    let changed = tracker.on_scroll(scroll_for(&tracker, 1500.0), &layout);
    assert_eq!(changed.map(String::as_str), Some("c"));
}

/// Probe that counts lookups, to check layout is read live on every event.
struct CountingProbe {
    inner: LayoutSnapshot,
    lookups: Cell<usize>,
}

impl LayoutProbe for CountingProbe {
    fn extent(&self, id: &str) -> Option<SectionExtent> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.extent(id)
    }
}

#[test]
fn layout_is_measured_on_every_scroll() {
    let mut tracker = ActiveSectionTracker::new(ids(&["a", "b", "c"]), None);
    let probe = CountingProbe {
        inner: abc_layout(0.0),
        lookups: Cell::new(0),
    };

    tracker.on_scroll(0.0, &probe);
    let first = probe.lookups.get();
    assert!(first >= 1);

    tracker.on_scroll(0.0, &probe);
    assert_eq!(probe.lookups.get(), first * 2);
}

#[test]
fn layout_changes_are_picked_up() {
    let mut tracker = ActiveSectionTracker::new(ids(&["a", "b", "c"]), None);

    tracker.on_scroll(scroll_for(&tracker, 700.0), &abc_layout(0.0));
    assert_eq!(tracker.active(), Some("b"));

    // Content above grew; the same anchor now sits in "a".
    tracker.on_scroll(scroll_for(&tracker, 700.0), &abc_layout(400.0));
    assert_eq!(tracker.active(), Some("a"));
}

#[test]
fn bundled_navigation_drives_tracker() {
    let content = Content::embedded().expect("bundled content is valid");
    let tracker = ActiveSectionTracker::new(content.section_ids(), content.default_section())
        .with_lookahead(content.settings.lookahead);

    assert_eq!(tracker.active(), Some("home"));
    assert_eq!(tracker.lookahead(), 100.0);
    assert_eq!(tracker.sections().len(), content.navigation.len());
}
