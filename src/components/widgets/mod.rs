pub mod chip;
pub mod section_shell;
pub mod skill_bar;

pub use chip::{Chip, ChipVariant};
pub use section_shell::SectionShell;
pub use skill_bar::SkillBar;

/// Class list for an element revealed once the loading gate opens.
pub fn reveal_class(loading: bool) -> &'static str {
    if loading {
        "reveal"
    } else {
        "reveal reveal-in"
    }
}

/// Staggered entrance: each card waits 200ms longer than the previous one.
pub fn reveal_delay(index: usize) -> String {
    format!("transition-delay: {}ms;", index * 200)
}
