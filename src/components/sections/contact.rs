use dioxus::prelude::*;

use crate::components::widgets::SectionShell;
use crate::hooks::PortfolioState;

#[component]
pub fn ContactSection() -> Element {
    let state = use_context::<PortfolioState>();
    let content = state.content();
    let (personal, blurb) = {
        let content = content.read();
        (content.personal.clone(), content.contact_blurb.clone())
    };
    let mailto = personal.mailto();

    rsx! {
        SectionShell { id: "contact", paper: true, class: "text-center",
            h2 { class: "section-title", "Get in Touch" }
            if !blurb.is_empty() {
                p { class: "lead muted", "{blurb}" }
            }
            div { class: "grid grid-3 justify-center",
                div { class: "paper contact-card",
                    div { class: "contact-icon", "⌖" }
                    h6 { "Location" }
                    p { class: "muted", "{personal.location}" }
                }
                div { class: "paper contact-card",
                    div { class: "contact-icon", "✉" }
                    h6 { "Email" }
                    a { class: "link", href: "{mailto}", "{personal.email}" }
                }
                if let Some(phone) = personal.phone.as_ref() {
                    div { class: "paper contact-card",
                        div { class: "contact-icon", "☏" }
                        h6 { "Phone" }
                        p { class: "muted", "{phone}" }
                    }
                }
            }
            div { class: "connect",
                h6 { "Connect with me" }
                div { class: "social-row",
                    a { class: "icon-btn", href: "{personal.linkedin}", target: "_blank", title: "LinkedIn", "in" }
                    a { class: "icon-btn", href: "{personal.github}", target: "_blank", title: "GitHub", "GH" }
                    a { class: "icon-btn", href: "{mailto}", title: "Email", "✉" }
                }
            }
        }
    }
}
