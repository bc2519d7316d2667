use dioxus::prelude::*;

use crate::types::Skill;

#[component]
pub fn SkillBar(skill: Skill, #[props(default)] compact: bool) -> Element {
    let level = skill.level.min(100);

    rsx! {
        div { class: if compact { "skill skill-compact" } else { "skill" },
            div { class: "skill-header",
                span { class: "skill-name", "{skill.name}" }
                span { class: "skill-level", "{level}%" }
            }
            div { class: "progress",
                div { class: "progress-bar", style: "width: {level}%;" }
            }
        }
    }
}
