use dioxus::prelude::*;

use crate::components::widgets::{reveal_class, reveal_delay, Chip, ChipVariant, SectionShell};
use crate::hooks::PortfolioState;

#[component]
pub fn ProjectsSection() -> Element {
    let state = use_context::<PortfolioState>();
    let content = state.content();
    let projects = content.read().projects.clone();
    let reveal = reveal_class(state.is_loading());

    rsx! {
        SectionShell { id: "projects", title: "Projects",
            div { class: "grid grid-2",
                for (index, project) in projects.into_iter().enumerate() {
                    article {
                        key: "{index}",
                        class: "card card-accent {reveal}",
                        style: reveal_delay(index),
                        h5 { "{project.title}" }
                        p { class: "muted small", "{project.description}" }
                        ul { class: "check-list small",
                            for (i, point) in project.highlights.iter().enumerate() {
                                li { key: "{i}", "{point}" }
                            }
                        }
                        div { class: "chip-row chip-row-bottom",
                            for tag in project.tags.iter() {
                                Chip { key: "{tag}", label: tag.clone(), variant: ChipVariant::Outlined, small: true }
                            }
                        }
                    }
                }
            }
        }
    }
}
