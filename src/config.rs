//! Process-level configuration read from the environment.
//!
//! Content-level tunables (lookahead, loading delay, default theme) live in
//! the `settings` block of the content file instead; see [`crate::types::Settings`].

use std::path::PathBuf;

use tracing::Level;

/// Log level: `error`, `warn`, `info`, `debug` or `trace`.
pub const LOG_LEVEL_ENV: &str = "FOLIO_LOG";

/// Path of a content file to load instead of the bundled one (native only).
pub const CONTENT_PATH_ENV: &str = "FOLIO_CONTENT";

pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

pub fn log_level_from(value: Option<&str>) -> Level {
    value
        .and_then(|v| v.trim().parse::<Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

pub fn log_level() -> Level {
    log_level_from(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
}

pub fn content_path() -> Option<PathBuf> {
    std::env::var_os(CONTENT_PATH_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(log_level_from(Some("debug")), Level::DEBUG);
        assert_eq!(log_level_from(Some(" WARN ")), Level::WARN);
        assert_eq!(log_level_from(Some("loud")), DEFAULT_LOG_LEVEL);
        assert_eq!(log_level_from(None), DEFAULT_LOG_LEVEL);
    }
}
