use serde::{Deserialize, Serialize};

/// Identifier of a page section; doubles as the DOM id of the section root.
pub type SectionId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavIcon {
    Home,
    Person,
    Work,
    School,
    Code,
    Article,
    Build,
    Email,
}

impl NavIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            NavIcon::Home => "⌂",
            NavIcon::Person => "☺",
            NavIcon::Work => "▣",
            NavIcon::School => "✎",
            NavIcon::Code => "⟨⟩",
            NavIcon::Article => "☰",
            NavIcon::Build => "⚙",
            NavIcon::Email => "✉",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub label: String,
    pub icon: NavIcon,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub linkedin: String,
    pub github: String,
    pub bio: String,
}

impl PersonalInfo {
    /// Up to two uppercase initials, used in place of a profile picture.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    #[serde(default)]
    pub specialization: Option<String>,
    pub school: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub date: String,
    pub authors: String,
    pub description: String,
    #[serde(default)]
    pub impact: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8, // percent, 0..=100
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Tunables read from the `settings` block of the content file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub lookahead: f64,
    pub loading_delay_ms: u64,
    pub dark_mode: bool,
    pub default_section: Option<SectionId>,
    pub drawer_width: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lookahead: 100.0,
            loading_delay_ms: 1000,
            dark_mode: true,
            default_section: None,
            drawer_width: 240,
        }
    }
}

impl Settings {
    pub fn loading_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.loading_delay_ms)
    }
}
