use dioxus::prelude::*;

use crate::components::widgets::{reveal_class, reveal_delay, Chip, ChipVariant, SectionShell};
use crate::hooks::PortfolioState;

#[component]
pub fn EducationSection() -> Element {
    let state = use_context::<PortfolioState>();
    let content = state.content();
    let entries = content.read().education.clone();
    let reveal = reveal_class(state.is_loading());

    rsx! {
        SectionShell { id: "education", title: "Education", paper: true,
            div { class: "grid grid-3",
                for (index, edu) in entries.into_iter().enumerate() {
                    article {
                        key: "{index}",
                        class: "card {reveal}",
                        style: reveal_delay(index),
                        h5 { "{edu.degree}" }
                        if let Some(specialization) = edu.specialization.as_ref() {
                            p { class: "accent", "{specialization}" }
                        }
                        p { class: "muted", "{edu.school}" }
                        Chip { label: edu.period.clone(), variant: ChipVariant::Outlined }
                        ul { class: "star-list",
                            for (i, point) in edu.highlights.iter().enumerate() {
                                li { key: "{i}", "{point}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
