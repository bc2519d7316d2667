use dioxus::prelude::*;

use crate::components::widgets::{reveal_class, Chip, SectionShell};
use crate::hooks::PortfolioState;

#[component]
pub fn HomeSection() -> Element {
    let state = use_context::<PortfolioState>();
    let content = state.content();
    let personal = content.read().personal.clone();
    let reveal = reveal_class(state.is_loading());
    let initials = personal.initials();
    let mailto = personal.mailto();

    rsx! {
        SectionShell { id: "home", class: "section-hero",
            div { class: "hero {reveal}",
                div { class: "avatar avatar-large", "{initials}" }
                h1 { class: "hero-name", "{personal.name}" }
                h4 { class: "hero-title", "{personal.title}" }
                div { class: "chip-row",
                    Chip { label: personal.location.clone(), icon: "⌖" }
                    Chip { label: personal.email.clone(), icon: "✉" }
                }
                div { class: "button-row",
                    a { class: "btn btn-contained", href: "#about", "Learn More →" }
                    a { class: "btn btn-outlined", href: "#contact", "Get in Touch" }
                }
                div { class: "social-row",
                    a { class: "icon-btn", href: "{personal.linkedin}", target: "_blank", title: "LinkedIn", "in" }
                    a { class: "icon-btn", href: "{personal.github}", target: "_blank", title: "GitHub", "GH" }
                    a { class: "icon-btn", href: "{mailto}", title: "Email", "✉" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::hooks::use_portfolio_state;
    use dioxus::dioxus_core::{AttributeValue, Mutation};

    #[component]
    fn WithState() -> Element {
        let content = Content::embedded().expect("bundled content");
        let state = use_portfolio_state(content);
        use_context_provider(|| state);
        rsx! { HomeSection {} }
    }

    fn attribute(edits: &[Mutation], attr: &str) -> Vec<String> {
        edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::SetAttribute {
                    name,
                    value: AttributeValue::Text(value),
                    ..
                } if *name == attr => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_home_root_comes_from_section_shell() {
        let mut dom = VirtualDom::new(WithState);
        let mutations = dom.rebuild_to_vec();

        assert_eq!(attribute(&mutations.edits, "id"), vec!["home".to_string()]);
        assert!(attribute(&mutations.edits, "class")
            .iter()
            .any(|class| class == "section section-hero"));
    }
}
