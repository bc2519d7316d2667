use dioxus::prelude::*;

use crate::components::sections::SectionById;
use crate::hooks::PortfolioState;

/// Sections in navigation order, so display order and scroll-check order agree.
#[component]
pub fn ContentArea() -> Element {
    let state = use_context::<PortfolioState>();
    let content = state.content();
    let (ids, drawer_width) = {
        let content = content.read();
        (content.section_ids(), content.settings.drawer_width)
    };

    rsx! {
        main {
            class: "content-area",
            style: "--drawer-width: {drawer_width}px;",
            for id in ids {
                SectionById { key: "{id}", id: id.clone() }
            }
        }
    }
}
