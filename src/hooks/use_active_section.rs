use std::rc::Rc;

use dioxus::prelude::*;

use crate::dom::{self, ScrollHandler};
use crate::hooks::use_portfolio_state::PortfolioState;
use crate::subscription::Subscription;
use crate::tracker::LayoutProbe;

/// Keep the highlighted navigation item in sync with the scroll position.
///
/// The listener lives in a hook slot, so it is removed when the calling
/// component unmounts.
pub fn use_active_section(state: PortfolioState) {
    use_hook(move || {
        let mut state = state;
        let handler: ScrollHandler = Box::new(move |scroll_y: f64, probe: &dyn LayoutProbe| {
            state.handle_scroll(scroll_y, probe);
        });

        let subscription = match dom::listen_scroll(handler) {
            Ok(subscription) => subscription,
            Err(e) => {
                tracing::warn!("scroll tracking disabled: {}", e);
                Subscription::noop()
            }
        };
        Rc::new(subscription)
    });
}
