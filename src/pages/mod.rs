use dioxus::prelude::*;

use crate::components::layout::PortfolioLayout;
use crate::content::Content;

#[component]
pub fn Portfolio() -> Element {
    let content = use_hook(|| Content::embedded().map_err(|e| e.to_string()));

    match content {
        Ok(content) => rsx! {
            PortfolioLayout { content }
        },
        Err(message) => {
            tracing::error!("bundled content is invalid: {}", message);
            rsx! {
                div { class: "content-error",
                    h4 { "Content unavailable" }
                    p { "{message}" }
                }
            }
        }
    }
}
