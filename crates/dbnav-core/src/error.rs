//! Error types for dbnav.

use thiserror::Error;

/// Transport errors - surfaced to the user as a blocking alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("[{status}] {status_text}")]
    Status { status: u16, status_text: String },

    /// No HTTP reply at all (connection refused, DNS, TLS...).
    #[error("Network error: {0}")]
    Network(String),

    /// The reply body is not the expected JSON.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Text shown in the blocking alert.
    pub fn alert_text(&self) -> String {
        self.to_string()
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors building a navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Writes are refused in read-only sessions.
    #[error("The database is readonly!")]
    ReadOnly,

    /// The page URL could not be resolved.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
