use dioxus::prelude::*;

use crate::hooks::PortfolioState;
use crate::types::Section;

#[component]
pub fn NavItem(section: Section) -> Element {
    let mut state = use_context::<PortfolioState>();
    let selected = state.is_current(&section.id);
    let id = section.id.clone();
    let glyph = section.icon.glyph();

    rsx! {
        button {
            class: if selected { "nav-item selected" } else { "nav-item" },
            "aria-current": if selected { "true" } else { "false" },
            onclick: move |_| state.jump_to(&id),
            span { class: "nav-icon", "{glyph}" }
            span { class: "nav-label", "{section.label}" }
        }
    }
}
