use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ChipVariant {
    #[default]
    Filled,
    Outlined,
    Primary,
    Secondary,
}

impl ChipVariant {
    fn class(self) -> &'static str {
        match self {
            ChipVariant::Filled => "chip",
            ChipVariant::Outlined => "chip chip-outlined",
            ChipVariant::Primary => "chip chip-primary",
            ChipVariant::Secondary => "chip chip-secondary",
        }
    }
}

#[component]
pub fn Chip(
    label: String,
    #[props(default)] variant: ChipVariant,
    #[props(default)] icon: Option<String>,
    #[props(default)] small: bool,
) -> Element {
    let class = if small {
        format!("{} chip-small", variant.class())
    } else {
        variant.class().to_string()
    };

    rsx! {
        span { class: "{class}",
            if let Some(icon) = icon {
                span { class: "chip-icon", "{icon}" }
            }
            span { class: "chip-label", "{label}" }
        }
    }
}
