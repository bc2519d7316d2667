//! Active-section tracking.
//!
//! The tracker owns the ordered list of section ids and the id currently
//! highlighted in navigation. Layout is never cached: every scroll
//! notification asks a [`LayoutProbe`] for the live extent of each section.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::SectionId;

/// Offset added to the scroll position before testing section membership.
pub const DEFAULT_LOOKAHEAD: f64 = 100.0;

/// Vertical extent of a rendered section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open test: `[top, top + height)`.
    pub fn contains(&self, anchor: f64) -> bool {
        anchor >= self.top && anchor < self.bottom()
    }
}

/// Live layout measurement supplied by the rendering environment.
pub trait LayoutProbe {
    /// `None` when the section has no mounted element (or no layout yet).
    fn extent(&self, id: &str) -> Option<SectionExtent>;
}

/// A captured layout: scroll position plus the extents of mounted sections.
///
/// This is what the native webview bridge sends on every scroll event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub scroll_y: f64,
    #[serde(default)]
    pub extents: HashMap<SectionId, SectionExtent>,
}

impl LayoutSnapshot {
    pub fn new(scroll_y: f64) -> Self {
        Self {
            scroll_y,
            extents: HashMap::new(),
        }
    }

    pub fn with_section(mut self, id: impl Into<SectionId>, top: f64, height: f64) -> Self {
        self.extents.insert(id.into(), SectionExtent::new(top, height));
        self
    }
}

impl LayoutProbe for LayoutSnapshot {
    fn extent(&self, id: &str) -> Option<SectionExtent> {
        self.extents.get(id).copied()
    }
}

impl<P: LayoutProbe + ?Sized> LayoutProbe for &P {
    fn extent(&self, id: &str) -> Option<SectionExtent> {
        (**self).extent(id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSectionTracker {
    sections: Vec<SectionId>,
    lookahead: f64,
    active: Option<SectionId>,
}

impl ActiveSectionTracker {
    /// `initial` falls back to the first section when absent or unknown.
    pub fn new(sections: Vec<SectionId>, initial: Option<&str>) -> Self {
        let active = initial
            .filter(|id| sections.iter().any(|s| s == *id))
            .map(str::to_string)
            .or_else(|| sections.first().cloned());

        Self {
            sections,
            lookahead: DEFAULT_LOOKAHEAD,
            active,
        }
    }

    pub fn with_lookahead(mut self, lookahead: f64) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn lookahead(&self) -> f64 {
        self.lookahead
    }

    /// Currently highlighted section; `None` only when there are no sections.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn anchor_for(&self, scroll_y: f64) -> f64 {
        scroll_y + self.lookahead
    }

    /// First section, in display order, whose live extent contains `anchor`.
    /// Unmounted sections are skipped.
    pub fn locate<P: LayoutProbe + ?Sized>(&self, anchor: f64, probe: &P) -> Option<&SectionId> {
        self.sections.iter().find(|id| {
            probe
                .extent(id)
                .is_some_and(|extent| extent.contains(anchor))
        })
    }

    /// Handle one scroll notification.
    ///
    /// Returns the newly active id when the state changed. No match leaves
    /// the current selection in place.
    pub fn on_scroll<P: LayoutProbe + ?Sized>(&mut self, scroll_y: f64, probe: &P) -> Option<&SectionId> {
        let anchor = self.anchor_for(scroll_y);
        let found = self.locate(anchor, probe)?.clone();
        if self.active.as_ref() == Some(&found) {
            return None;
        }
        self.active = Some(found);
        self.active.as_ref()
    }

    /// Explicit selection from a navigation click. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        if self.is_active(id) || !self.sections.iter().any(|s| s == id) {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<SectionId> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extent_is_half_open() {
        let extent = SectionExtent::new(800.0, 800.0);
        assert!(extent.contains(800.0));
        assert!(extent.contains(1599.9));
        assert!(!extent.contains(1600.0));
        assert!(!extent.contains(799.9));
    }

    #[test]
    fn test_zero_height_section_never_matches() {
        assert!(!SectionExtent::new(100.0, 0.0).contains(100.0));
    }

    #[test]
    fn test_initial_defaults_to_first_section() {
        let tracker = ActiveSectionTracker::new(ids(&["home", "about"]), None);
        assert_eq!(tracker.active(), Some("home"));

        let tracker = ActiveSectionTracker::new(ids(&["home", "about"]), Some("missing"));
        assert_eq!(tracker.active(), Some("home"));

        let tracker = ActiveSectionTracker::new(ids(&["home", "about"]), Some("about"));
        assert_eq!(tracker.active(), Some("about"));
    }

    #[test]
    fn test_no_sections_means_none() {
        let mut tracker = ActiveSectionTracker::new(Vec::new(), Some("home"));
        assert_eq!(tracker.active(), None);
        assert!(tracker.on_scroll(0.0, &LayoutSnapshot::new(0.0)).is_none());
        assert!(!tracker.select("home"));
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let tracker = ActiveSectionTracker::new(ids(&["a", "b"]), None);
        let layout = LayoutSnapshot::new(0.0)
            .with_section("a", 0.0, 500.0)
            .with_section("b", 200.0, 500.0);
        assert_eq!(tracker.locate(300.0, &layout).map(String::as_str), Some("a"));
    }

    #[test]
    fn test_on_scroll_reports_only_changes() {
        let mut tracker = ActiveSectionTracker::new(ids(&["home", "about"]), None);
        let layout = LayoutSnapshot::new(0.0)
            .with_section("home", 0.0, 800.0)
            .with_section("about", 800.0, 800.0);

        assert!(tracker.on_scroll(0.0, &layout).is_none());
        assert_eq!(tracker.on_scroll(750.0, &layout).map(String::as_str), Some("about"));
        assert!(tracker.on_scroll(760.0, &layout).is_none());
        assert_eq!(tracker.active(), Some("about"));
    }

    #[test]
    fn test_custom_lookahead() {
        let mut tracker =
            ActiveSectionTracker::new(ids(&["home", "about"]), None).with_lookahead(0.0);
        let layout = LayoutSnapshot::new(0.0)
            .with_section("home", 0.0, 800.0)
            .with_section("about", 800.0, 800.0);

        assert!(tracker.on_scroll(750.0, &layout).is_none());
        assert_eq!(tracker.active(), Some("home"));
        assert_eq!(tracker.anchor_for(750.0), 750.0);
    }

    #[test]
    fn test_select() {
        let mut tracker = ActiveSectionTracker::new(ids(&["home", "about"]), None);
        assert!(tracker.select("about"));
        assert!(!tracker.select("about"));
        assert!(!tracker.select("nowhere"));
        assert_eq!(tracker.active(), Some("about"));
        assert_eq!(tracker.position_of("about"), Some(1));
    }

    #[test]
    fn test_snapshot_deserializes_from_bridge_payload() {
        let json = r#"{
            "scroll_y": 420.5,
            "extents": { "home": { "top": 0, "height": 900 } }
        }"#;
        let snapshot: LayoutSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.scroll_y, 420.5);
        assert_eq!(snapshot.extent("home"), Some(SectionExtent::new(0.0, 900.0)));
        assert_eq!(snapshot.extent("about"), None);
    }
}
