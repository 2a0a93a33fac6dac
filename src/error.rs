//! Error types for color parsing and picker configuration.

use thiserror::Error;

/// Reasons a color string is refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("unrecognized color: {0}")]
    Unrecognized(String),
    #[error("bad {channel} channel in {input}")]
    BadChannel { channel: &'static str, input: String },
    #[error("keyword {0} does not name a concrete color")]
    NonColor(String),
}

/// Errors raised while loading picker options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("locale override is missing key: {0}")]
    MissingLocaleKey(String),
    #[error("invalid color presets: {0}")]
    InvalidPresets(String),
}

/// Result alias for option loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
