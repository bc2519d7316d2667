use dioxus::prelude::*;

use crate::content::Content;
use crate::dom;
use crate::loading_gate::LoadingGate;
use crate::theme::{Palette, ThemeMode};
use crate::tracker::{ActiveSectionTracker, LayoutProbe};
use crate::types::Settings;

/// View state of the whole page, owned by the top-level layout and shared
/// through context. Components read through the accessors and mutate only
/// through the setters below.
#[derive(Clone, Copy, PartialEq)]
pub struct PortfolioState {
    content: Signal<Content>,
    tracker: Signal<ActiveSectionTracker>,
    theme: Signal<ThemeMode>,
    mobile_open: Signal<bool>,
    gate: Signal<LoadingGate>,
}

fn tracker_for(content: &Content) -> ActiveSectionTracker {
    ActiveSectionTracker::new(content.section_ids(), content.default_section())
        .with_lookahead(content.settings.lookahead)
}

pub fn use_portfolio_state(initial: Content) -> PortfolioState {
    let tracker = use_signal(|| tracker_for(&initial));
    let theme = use_signal(|| ThemeMode::from_dark(initial.settings.dark_mode));
    let mobile_open = use_signal(|| false);
    let gate = use_signal(LoadingGate::new);
    let content = use_signal(move || initial);

    PortfolioState {
        content,
        tracker,
        theme,
        mobile_open,
        gate,
    }
}

impl PortfolioState {
    pub fn content(&self) -> ReadOnlySignal<Content> {
        self.content.into()
    }

    /// Settings without subscribing the caller to content changes.
    pub fn settings(&self) -> Settings {
        self.content.peek().settings.clone()
    }

    pub fn current_section(&self) -> Option<String> {
        self.tracker.read().active().map(str::to_string)
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.tracker.read().is_active(id)
    }

    pub fn theme(&self) -> ThemeMode {
        *self.theme.read()
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.theme())
    }

    pub fn is_mobile_open(&self) -> bool {
        *self.mobile_open.read()
    }

    pub fn is_loading(&self) -> bool {
        self.gate.read().is_loading()
    }

    /// Feed one scroll notification to the tracker. The signal is written
    /// only when the active section actually changes.
    pub fn handle_scroll(&mut self, scroll_y: f64, probe: &dyn LayoutProbe) {
        let found = {
            let tracker = self.tracker.peek();
            let anchor = tracker.anchor_for(scroll_y);
            match tracker.locate(anchor, probe) {
                Some(id) if !tracker.is_active(id) => id.clone(),
                _ => return,
            }
        };
        tracing::debug!("active section -> {}", found);
        self.tracker.write().select(&found);
    }

    /// Navigation click: highlight immediately, close the mobile drawer and
    /// ask the environment to smooth-scroll there.
    pub fn jump_to(&mut self, id: &str) {
        if self.tracker.peek().position_of(id).is_none() {
            tracing::warn!("ignoring jump to unknown section '{}'", id);
            return;
        }
        if !self.tracker.peek().is_active(id) {
            self.tracker.write().select(id);
        }
        self.mobile_open.set(false);
        dom::scroll_to_section(id);
    }

    pub fn toggle_theme(&mut self) {
        let next = self.theme.peek().toggle();
        self.theme.set(next);
    }

    pub fn toggle_mobile(&mut self) {
        let open = *self.mobile_open.peek();
        self.mobile_open.set(!open);
    }

    pub fn close_mobile(&mut self) {
        if *self.mobile_open.peek() {
            self.mobile_open.set(false);
        }
    }

    pub fn release_loading(&mut self) {
        if self.gate.peek().is_loading() && self.gate.write().release() {
            tracing::debug!("loading gate released");
        }
    }

    /// Swap in new content. The tracker is rebuilt for the new navigation,
    /// keeping the current selection when that section still exists.
    pub fn replace_content(&mut self, content: Content) {
        let current = self.tracker.peek().active().map(str::to_string);
        let mut tracker = tracker_for(&content);
        if let Some(id) = current {
            tracker.select(&id);
        }
        self.tracker.set(tracker);
        self.content.set(content);
    }
}
