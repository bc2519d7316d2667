use dioxus::prelude::*;

use crate::hooks::PortfolioState;

#[component]
pub fn TopBar() -> Element {
    let mut state = use_context::<PortfolioState>();
    let content = state.content();
    let name = content.read().personal.name.clone();
    let theme = state.theme();
    let glyph = theme.toggle_glyph();

    rsx! {
        header { class: "app-bar",
            button {
                class: "icon-btn menu-btn",
                title: "Open navigation",
                onclick: move |_| state.toggle_mobile(),
                "☰"
            }
            h6 { class: "app-bar-title nowrap", "{name}" }
            button {
                class: "icon-btn",
                title: if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" },
                onclick: move |_| state.toggle_theme(),
                "{glyph}"
            }
        }
    }
}
