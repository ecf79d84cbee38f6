//! Error handling for the karaoke-search application
//!
//! Only `KaraokeError::UnsupportedProvider` is meant to reach callers of a
//! search. Network and markup failures are absorbed inside each provider and
//! surface as an empty result; their types live here so the providers, the
//! factory and the CLI share one vocabulary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KaraokeError {
    #[error("Unsupported karaoke provider: {name}")]
    UnsupportedProvider { name: String },

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: std::path::PathBuf },

    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to determine project directories")]
    ProjectDirs,
}

pub type Result<T> = std::result::Result<T, KaraokeError>;

impl KaraokeError {
    pub fn unsupported_provider(name: impl Into<String>) -> Self {
        KaraokeError::UnsupportedProvider { name: name.into() }
    }
}

impl From<std::io::Error> for KaraokeError {
    fn from(err: std::io::Error) -> Self {
        KaraokeError::Internal(err.into())
    }
}

impl From<toml::de::Error> for KaraokeError {
    fn from(err: toml::de::Error) -> Self {
        KaraokeError::Config(ConfigError::InvalidFormat(err))
    }
}

impl From<toml::ser::Error> for KaraokeError {
    fn from(err: toml::ser::Error) -> Self {
        KaraokeError::Config(ConfigError::Serialize(err))
    }
}

impl From<serde_json::Error> for KaraokeError {
    fn from(err: serde_json::Error) -> Self {
        KaraokeError::Internal(err.into())
    }
}
