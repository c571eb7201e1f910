//! Application configuration loaded from TOML.

use crate::session::DecidedTapPolicy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "tapgrid.toml";

/// Symbols drawn for each mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Symbol for X.
    x: String,
    /// Symbol for O.
    o: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            x: "X".to_string(),
            o: "O".to_string(),
        }
    }
}

impl Glyphs {
    /// Creates a glyph pair.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Symbol for `mark`.
    pub fn for_mark(&self, mark: tapgrid_rules::Mark) -> &str {
        match mark {
            tapgrid_rules::Mark::X => &self.x,
            tapgrid_rules::Mark::O => &self.o,
        }
    }
}

/// Settings for the `tapgrid` binary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// What a tap on a won or drawn board does.
    decided_tap: DecidedTapPolicy,

    /// `tracing` filter directive, overridden by `RUST_LOG`.
    log_filter: String,

    /// Log file used while the terminal UI owns the screen.
    log_file: PathBuf,

    /// Mark symbols.
    glyphs: Glyphs,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            decided_tap: DecidedTapPolicy::default(),
            log_filter: "info".to_string(),
            log_file: PathBuf::from("tapgrid.log"),
            glyphs: Glyphs::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(decided_tap = %config.decided_tap, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise the default file if present.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file yields the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the decided-board policy.
    pub fn with_decided_tap(mut self, policy: DecidedTapPolicy) -> Self {
        self.decided_tap = policy;
        self
    }

    /// Picks the log directives: the command-line flag, then `RUST_LOG`,
    /// then the file's `log_filter`. A blank environment value counts as unset.
    pub fn log_directives<'a>(&'a self, flag: Option<&'a str>, env: Option<&'a str>) -> &'a str {
        let env = env.filter(|value| !value.trim().is_empty());
        flag.or(env).unwrap_or(&self.log_filter)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, glyph) in [("x", &self.glyphs.x), ("o", &self.glyphs.o)] {
            let width = glyph.chars().count();
            if width == 0 || width > 3 {
                return Err(ConfigError::new(format!(
                    "Glyph for {} must be 1 to 3 characters, got {:?}",
                    name, glyph
                )));
            }
        }
        if self.glyphs.x == self.glyphs.o {
            return Err(ConfigError::new(format!(
                "Glyphs for X and O must differ, both are {:?}",
                self.glyphs.x
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_parses_all_fields() {
        let config = AppConfig::from_toml(
            r#"
            decided_tap = "clear-and-place"
            log_filter = "tapgrid=debug"
            log_file = "/tmp/grid.log"

            [glyphs]
            x = "×"
            o = "○"
            "#,
        )
        .unwrap();
        assert_eq!(config.decided_tap(), &DecidedTapPolicy::ClearAndPlace);
        assert_eq!(config.log_filter(), "tapgrid=debug");
        assert_eq!(config.log_file(), Path::new("/tmp/grid.log"));
        assert_eq!(config.glyphs().for_mark(tapgrid_rules::Mark::O), "○");
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let err = AppConfig::from_toml(r#"decided_tap = "ignore""#).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_rejects_identical_glyphs() {
        let err = AppConfig::from_toml("[glyphs]\nx = \"#\"\no = \"#\"").unwrap_err();
        assert!(err.message.contains("must differ"));
    }

    #[test]
    fn test_rejects_empty_glyph() {
        let err = AppConfig::from_toml("[glyphs]\nx = \"\"").unwrap_err();
        assert!(err.message.contains("1 to 3 characters"));
    }
}
