use dioxus::prelude::*;

use crate::components::widgets::{reveal_class, reveal_delay, Chip, ChipVariant, SectionShell};
use crate::hooks::PortfolioState;

#[component]
pub fn PublicationsSection() -> Element {
    let state = use_context::<PortfolioState>();
    let content = state.content();
    let publications = content.read().publications.clone();
    let reveal = reveal_class(state.is_loading());

    rsx! {
        SectionShell { id: "publications", title: "Publications", paper: true,
            div { class: "grid grid-1",
                for (index, publication) in publications.into_iter().enumerate() {
                    article {
                        key: "{index}",
                        class: "card card-accent {reveal}",
                        style: reveal_delay(index),
                        h5 { "{publication.title}" }
                        p { class: "muted small", "{publication.authors} • {publication.date}" }
                        if let Some(impact) = publication.impact.as_ref() {
                            Chip { label: impact.clone(), variant: ChipVariant::Primary, small: true }
                        }
                        p { class: "body small", "{publication.description}" }
                        div { class: "chip-row",
                            for tag in publication.tags.iter() {
                                Chip { key: "{tag}", label: tag.clone(), variant: ChipVariant::Outlined, small: true }
                            }
                        }
                    }
                }
            }
        }
    }
}
