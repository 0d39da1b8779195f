//! Configuration types.
//!
//! The hosting page normally provides the read-only flag. Headless hosts read
//! it from `~/.config/dbnav/config.toml` instead:
//!
//! ```toml
//! readonly = true
//! page_url = "http://localhost:5000/admin/sql"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// The server refuses writes. Only changes the zero-rows message.
    #[serde(default)]
    pub readonly: bool,

    /// Page URL the client talks to when the host does not supply one.
    #[serde(default)]
    pub page_url: Option<String>,
}

impl ClientConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&text)
    }

    /// Load the user configuration, falling back to defaults if it is missing.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            tracing::info!("No config found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        tracing::info!("Loading config from {:?}", path);
        Self::load_from(&path)
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("dbnav"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_toml("").unwrap();
        assert!(!config.readonly);
        assert!(config.page_url.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "readonly = true").unwrap();
        writeln!(file, r#"page_url = "http://localhost:5000/admin/sql""#).unwrap();

        let config = ClientConfig::load_from(file.path()).unwrap();
        assert!(config.readonly);
        assert_eq!(
            config.page_url.as_deref(),
            Some("http://localhost:5000/admin/sql")
        );
    }

    #[test]
    fn test_parse_error() {
        let err = ClientConfig::from_toml("readonly = \"maybe\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
