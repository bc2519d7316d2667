pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod home;
pub mod projects;
pub mod publications;
pub mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use home::HomeSection;
pub use projects::ProjectsSection;
pub use publications::PublicationsSection;
pub use skills::SkillsSection;

use dioxus::prelude::*;

/// Render the body of a section by id. Ids without a dedicated component
/// render nothing, so navigation entries can be reordered or dropped freely.
#[component]
pub fn SectionById(id: String) -> Element {
    match id.as_str() {
        "home" => rsx! { HomeSection {} },
        "about" => rsx! { AboutSection {} },
        "experience" => rsx! { ExperienceSection {} },
        "education" => rsx! { EducationSection {} },
        "projects" => rsx! { ProjectsSection {} },
        "publications" => rsx! { PublicationsSection {} },
        "skills" => rsx! { SkillsSection {} },
        "contact" => rsx! { ContactSection {} },
        other => {
            tracing::warn!("no component for section '{}'", other);
            rsx! {}
        }
    }
}
