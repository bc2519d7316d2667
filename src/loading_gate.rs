//! One-shot flag that holds entrance animations back for a moment after mount.

use std::time::Duration;

use crate::subscription::Subscription;
use crate::timer::Scheduler;

pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    Loading,
    Ready,
}

/// Starts in [`GatePhase::Loading`] and moves to [`GatePhase::Ready`] once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingGate {
    phase: GatePhase,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingGate {
    pub fn new() -> Self {
        Self {
            phase: GatePhase::Loading,
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == GatePhase::Loading
    }

    /// Returns `true` only for the single Loading -> Ready transition.
    pub fn release(&mut self) -> bool {
        match self.phase {
            GatePhase::Loading => {
                self.phase = GatePhase::Ready;
                true
            }
            GatePhase::Ready => false,
        }
    }

    /// Schedule `on_release` after `delay`. Dropping the returned subscription
    /// before it fires guarantees `on_release` never runs.
    pub fn arm<S: Scheduler + ?Sized>(
        scheduler: &S,
        delay: Duration,
        on_release: impl FnOnce() + 'static,
    ) -> Subscription {
        scheduler.schedule(delay, Box::new(on_release))
    }
}
