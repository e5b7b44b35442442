//! Console configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConsoleError, Result};
use crate::paths;

/// Settings read from `config.toml`. Every field has a default, so an
/// empty or missing file is valid.
///
/// ```toml
/// items_per_page = 25
/// max_height = 30
/// log_level = "debug"
/// log_file = "/tmp/budget-console.log"
/// currency_symbol = "€"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Page size used when `--per-page` is not given.
    pub items_per_page: usize,
    /// Body rows shown before the grid scrolls. 0 disables the limit.
    pub max_height: u16,
    /// Minimum log level.
    pub log_level: String,
    /// Write logs here instead of the terminal.
    pub log_file: Option<PathBuf>,
    /// Prefix for currency columns.
    pub currency_symbol: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            items_per_page: 10,
            max_height: 20,
            log_level: "info".to_string(),
            log_file: None,
            currency_symbol: "$".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a config document.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| ConsoleError::config(origin, e))
    }

    /// Load the config.
    ///
    /// An explicit path must exist. Without one, the platform config file is
    /// used when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match paths::config_file() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };
        let text = fs::read_to_string(&path)?;
        Self::parse(&text, &path)
    }

    /// Body height limit, if any.
    pub fn height_limit(&self) -> Option<u16> {
        (self.max_height > 0).then_some(self.max_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ConsoleConfig::parse("", Path::new("config.toml")).unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.height_limit(), Some(20));
    }

    #[test]
    fn test_partial_config() {
        let text = "items_per_page = 25\nmax_height = 0\ncurrency_symbol = \"€\"\n";
        let config = ConsoleConfig::parse(text, Path::new("config.toml")).unwrap();
        assert_eq!(config.items_per_page, 25);
        assert_eq!(config.height_limit(), None);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = ConsoleConfig::parse("page_size = 3", Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, ConsoleError::Config { .. }));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let config = ConsoleConfig::load(Some(&path)).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConsoleConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConsoleError::Io(_)));
    }
}
