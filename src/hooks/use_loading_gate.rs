use std::rc::Rc;

use dioxus::prelude::*;

use crate::hooks::use_portfolio_state::PortfolioState;
use crate::loading_gate::LoadingGate;
use crate::timer::platform_scheduler;

/// Arm the one-shot loading gate. Unmounting first cancels the timeout.
pub fn use_loading_gate(state: PortfolioState) {
    use_hook(move || {
        let mut state = state;
        let delay = state.settings().loading_delay();
        let subscription = LoadingGate::arm(&platform_scheduler(), delay, move || {
            state.release_loading();
        });
        Rc::new(subscription)
    });
}
