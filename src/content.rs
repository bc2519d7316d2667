//! Portfolio content: everything the page renders that is not behaviour.
//!
//! The bundled `content/portfolio.json` is compiled in. A replacement can be
//! read from disk on native targets (see [`crate::config::content_path`]) or
//! fetched over HTTP when the build sets `FOLIO_CONTENT_URL`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};
use crate::types::*;

static EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub settings: Settings,
    pub personal: PersonalInfo,
    #[serde(default)]
    pub contact_blurb: String,
    pub navigation: Vec<Section>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}

impl Content {
    /// Content compiled into the binary.
    pub fn embedded() -> ContentResult<Self> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(json: &str) -> ContentResult<Self> {
        let content: Content = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub async fn from_path(path: impl AsRef<std::path::Path>) -> ContentResult<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> ContentResult<()> {
        if self.navigation.is_empty() {
            return Err(ContentError::EmptyNavigation);
        }

        let mut seen = HashSet::new();
        for section in &self.navigation {
            if !seen.insert(section.id.as_str()) {
                return Err(ContentError::DuplicateSection(section.id.clone()));
            }
        }

        if let Some(default) = &self.settings.default_section {
            if !seen.contains(default.as_str()) {
                return Err(ContentError::UnknownDefaultSection(default.clone()));
            }
        }

        if !self.settings.lookahead.is_finite() {
            return Err(ContentError::InvalidSetting(format!(
                "lookahead must be finite, got {}",
                self.settings.lookahead
            )));
        }

        for category in &self.skills {
            for skill in &category.skills {
                if skill.level > 100 {
                    return Err(ContentError::SkillLevelOutOfRange {
                        category: category.category.clone(),
                        skill: skill.name.clone(),
                        level: skill.level,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn section_ids(&self) -> Vec<SectionId> {
        self.navigation.iter().map(|s| s.id.clone()).collect()
    }

    /// Configured default, else the first section.
    pub fn default_section(&self) -> Option<&str> {
        self.settings
            .default_section
            .as_deref()
            .or_else(|| self.navigation.first().map(|s| s.id.as_str()))
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.navigation.iter().find(|s| s.id == id)
    }

    /// Short skills preview for the about section: the first three skills of
    /// the first three categories.
    pub fn skill_highlights(&self) -> Vec<SkillCategory> {
        self.skills
            .iter()
            .take(3)
            .map(|category| SkillCategory {
                category: category.category.clone(),
                skills: category.skills.iter().take(3).cloned().collect(),
            })
            .collect()
    }
}

/// Fetches a content document over HTTP
pub struct ContentClient {
    url: String,
    client: reqwest::Client,
}

impl ContentClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// URL baked in at build time, if any.
    pub fn from_build_env() -> Option<Self> {
        option_env!("FOLIO_CONTENT_URL")
            .filter(|url| !url.is_empty())
            .map(Self::new)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> ContentResult<Content> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(ContentError::ApiError(response.status().to_string()));
        }

        let json = response.text().await?;
        Content::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(navigation: &str, extra: &str) -> String {
        format!(
            r#"{{
                "personal": {{
                    "name": "Test Person",
                    "title": "Engineer",
                    "location": "Nowhere",
                    "email": "t@example.com",
                    "linkedin": "https://linkedin.com/in/t",
                    "github": "https://github.com/t",
                    "bio": "Bio"
                }},
                "navigation": {navigation}
                {extra}
            }}"#
        )
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let content = Content::embedded().unwrap();
        assert_eq!(
            content.section_ids(),
            vec![
                "home",
                "about",
                "experience",
                "education",
                "projects",
                "publications",
                "skills",
                "contact"
            ]
        );
        assert_eq!(content.default_section(), Some("home"));
        assert!(content.settings.dark_mode);
        assert_eq!(content.settings.lookahead, 100.0);
        assert!(!content.experience.is_empty());
        assert!(content.publications.iter().any(|p| p.impact.is_some()));
    }

    #[test]
    fn test_skill_order_is_preserved() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.skills[0].category, "Full Stack Development");
        let highlights = content.skill_highlights();
        assert_eq!(highlights.len(), 3);
        assert!(highlights.iter().all(|c| c.skills.len() <= 3));
    }

    #[test]
    fn test_default_section_falls_back_to_first() {
        let json = minimal(r#"[{ "id": "intro", "label": "Intro", "icon": "home" }]"#, "");
        let content = Content::from_json(&json).unwrap();
        assert_eq!(content.default_section(), Some("intro"));
        assert_eq!(content.settings.loading_delay_ms, 1000);
    }

    #[test]
    fn test_rejects_empty_navigation() {
        let json = minimal("[]", "");
        assert!(matches!(
            Content::from_json(&json),
            Err(ContentError::EmptyNavigation)
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = minimal(
            r#"[
                { "id": "home", "label": "Home", "icon": "home" },
                { "id": "home", "label": "Again", "icon": "person" }
            ]"#,
            "",
        );
        match Content::from_json(&json) {
            Err(ContentError::DuplicateSection(id)) => assert_eq!(id, "home"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_default_section() {
        let json = minimal(
            r#"[{ "id": "home", "label": "Home", "icon": "home" }]"#,
            r#", "settings": { "default_section": "blog" }"#,
        );
        assert!(matches!(
            Content::from_json(&json),
            Err(ContentError::UnknownDefaultSection(_))
        ));
    }

    #[test]
    fn test_rejects_skill_level_over_100() {
        let json = minimal(
            r#"[{ "id": "home", "label": "Home", "icon": "home" }]"#,
            r#", "skills": [{ "category": "Lang", "skills": [{ "name": "Rust", "level": 120 }] }]"#,
        );
        let err = Content::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("Rust"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Content::from_json("{ not json"),
            Err(ContentError::ParseError(_))
        ));
    }
}
