use dioxus::prelude::*;

use crate::components::widgets::{SectionShell, SkillBar};
use crate::hooks::PortfolioState;

#[component]
pub fn AboutSection() -> Element {
    let state = use_context::<PortfolioState>();
    let content = state.content();
    let (bio, highlights) = {
        let content = content.read();
        (content.personal.bio.clone(), content.skill_highlights())
    };

    rsx! {
        SectionShell { id: "about",
            div { class: "grid grid-2 align-center",
                div {
                    h2 { class: "section-title", "About Me" }
                    p { class: "body", "{bio}" }
                    a { class: "btn btn-contained", href: "#experience", "View Experience →" }
                }
                div { class: "paper",
                    for category in highlights {
                        div { key: "{category.category}", class: "skill-group",
                            h6 { "{category.category}" }
                            for skill in category.skills {
                                SkillBar { key: "{skill.name}", skill: skill.clone(), compact: true }
                            }
                        }
                    }
                }
            }
        }
    }
}
