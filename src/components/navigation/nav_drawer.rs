use dioxus::prelude::*;

use crate::components::navigation::NavItem;
use crate::hooks::PortfolioState;

/// Profile header plus the section list. Rendered twice by the layout: as a
/// permanent sidebar and as a temporary drawer on small screens.
#[component]
pub fn NavDrawer(#[props(default)] temporary: bool) -> Element {
    let mut state = use_context::<PortfolioState>();
    let content = state.content();
    let (personal, navigation, width) = {
        let content = content.read();
        (
            content.personal.clone(),
            content.navigation.clone(),
            content.settings.drawer_width,
        )
    };
    let initials = personal.initials();

    let open = !temporary || state.is_mobile_open();
    let class = match (temporary, open) {
        (false, _) => "drawer drawer-permanent",
        (true, true) => "drawer drawer-temporary open",
        (true, false) => "drawer drawer-temporary",
    };

    rsx! {
        if temporary && open {
            div {
                class: "drawer-backdrop",
                onclick: move |_| state.close_mobile(),
            }
        }
        nav {
            class: "{class}",
            style: "width: {width}px;",
            div { class: "drawer-profile",
                div { class: "avatar", "{initials}" }
                h6 { class: "nowrap", "{personal.name}" }
                p { class: "muted small", "{personal.title}" }
            }
            hr { class: "divider" }
            ul { class: "nav-list",
                for section in navigation {
                    li { key: "{section.id}",
                        NavItem { section: section.clone() }
                    }
                }
            }
        }
    }
}
