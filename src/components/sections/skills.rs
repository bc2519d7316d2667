use dioxus::prelude::*;

use crate::components::widgets::{reveal_class, reveal_delay, SectionShell, SkillBar};
use crate::hooks::PortfolioState;

#[component]
pub fn SkillsSection() -> Element {
    let state = use_context::<PortfolioState>();
    let content = state.content();
    let categories = content.read().skills.clone();
    let reveal = reveal_class(state.is_loading());

    rsx! {
        SectionShell { id: "skills", title: "Skills",
            div { class: "grid grid-3",
                for (index, category) in categories.into_iter().enumerate() {
                    div {
                        key: "{category.category}",
                        class: "paper {reveal}",
                        style: reveal_delay(index),
                        h5 { "{category.category}" }
                        for skill in category.skills {
                            SkillBar { key: "{skill.name}", skill: skill.clone() }
                        }
                    }
                }
            }
        }
    }
}
