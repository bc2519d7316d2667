//! Error types for content loading and the browser layer

use thiserror::Error;

/// Errors raised while loading or validating portfolio content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Navigation must list at least one section")]
    EmptyNavigation,

    #[error("Duplicate section id '{0}'")]
    DuplicateSection(String),

    #[error("Default section '{0}' is not in the navigation")]
    UnknownDefaultSection(String),

    #[error("Skill '{skill}' in '{category}' has level {level}, expected 0..=100")]
    SkillLevelOutOfRange {
        category: String,
        skill: String,
        level: u8,
    },

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Content request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Content server returned {0}")]
    ApiError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;

/// Failures talking to the browser environment. Never surfaced to the user.
#[derive(Error, Debug)]
pub enum DomError {
    #[error("No global window")]
    NoWindow,

    #[error("No document on window")]
    NoDocument,

    #[error("JavaScript error: {0}")]
    Js(String),
}
