use dioxus::prelude::*;

/// Root element of a page section. The `id` is what scroll tracking measures,
/// `data-section` marks it for the webview bridge.
#[component]
pub fn SectionShell(
    id: String,
    #[props(default)] title: Option<String>,
    #[props(default)] paper: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let background = if paper { "section section-paper" } else { "section" };
    let extra = class.unwrap_or_default();

    rsx! {
        section {
            id: "{id}",
            "data-section": "true",
            class: "{background} {extra}",
            div { class: "container",
                if let Some(title) = title {
                    h2 { class: "section-title", "{title}" }
                }
                {children}
            }
        }
    }
}
