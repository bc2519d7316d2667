use dioxus::prelude::*;

use crate::components::widgets::{reveal_class, reveal_delay, Chip, ChipVariant, SectionShell};
use crate::hooks::PortfolioState;

#[component]
pub fn ExperienceSection() -> Element {
    let state = use_context::<PortfolioState>();
    let content = state.content();
    let jobs = content.read().experience.clone();
    let reveal = reveal_class(state.is_loading());

    rsx! {
        SectionShell { id: "experience", title: "Experience",
            div { class: "grid grid-1",
                for (index, job) in jobs.into_iter().enumerate() {
                    article {
                        key: "{index}",
                        class: "card {reveal}",
                        style: reveal_delay(index),
                        div { class: "card-header",
                            div {
                                h5 { "{job.title}" }
                                p { class: "muted", "{job.company}" }
                            }
                            Chip { label: job.period.clone(), variant: ChipVariant::Outlined }
                        }
                        ul { class: "check-list",
                            for (i, point) in job.description.iter().enumerate() {
                                li { key: "{i}", "{point}" }
                            }
                        }
                        div { class: "chip-row",
                            for tech in job.technologies.iter() {
                                Chip { key: "{tech}", label: tech.clone(), variant: ChipVariant::Secondary, small: true }
                            }
                        }
                    }
                }
            }
        }
    }
}
