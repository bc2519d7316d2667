use dioxus::prelude::*;

use crate::content::Content;
use crate::hooks::{
    use_active_section, use_content_override, use_loading_gate, use_portfolio_state,
};

#[component]
pub fn PortfolioLayout(content: Content) -> Element {
    let state = use_portfolio_state(content);
    use_context_provider(|| state);

    use_loading_gate(state);
    use_active_section(state);
    use_content_override(state);

    let theme = state.theme();
    let palette = state.palette();

    rsx! {
        div {
            class: if theme.is_dark() { "portfolio theme-dark" } else { "portfolio theme-light" },
            style: palette.css_vars(),
            crate::components::layout::TopBar {}
            div { class: "portfolio-body",
                crate::components::navigation::NavDrawer {}
                crate::components::navigation::NavDrawer { temporary: true }
                crate::components::layout::ContentArea {}
            }
        }
    }
}
