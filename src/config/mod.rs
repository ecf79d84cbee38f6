use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use crate::core::services::{ky, tj};
use crate::error::{ConfigError, Result};

pub mod builder;
pub mod env;
pub mod validation;

pub use builder::ConfigBuilder;
pub use env::{EnvParser, EnvVars};

fn default_request_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("karaoke-search/{}", env!("CARGO_PKG_VERSION"))
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_tj_base_url() -> String {
    tj::DEFAULT_BASE_URL.to_string()
}

fn default_ky_base_url() -> String {
    ky::DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// TJ Media search endpoint
    #[serde(default = "default_tj_base_url")]
    pub tj_base_url: String,

    /// Kumyoung search endpoint
    #[serde(default = "default_ky_base_url")]
    pub ky_base_url: String,

    /// Per-request timeout for catalog fetches (seconds)
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    /// User-Agent sent to the catalog sites
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Listen address for `serve`
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tj_base_url: default_tj_base_url(),
            ky_base_url: default_ky_base_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
            user_agent: default_user_agent(),
            bind_address: default_bind_address(),
        }
    }
}

impl Config {
    /// Defaults, then the config file, then `KARAOKE_*` environment
    /// variables (highest priority). The result is validated.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        // Try to load .env file if it exists (for Docker and development)
        dotenvy::dotenv().ok();

        let config_file = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.to_path_buf(),
                    }
                    .into());
                }
                path.to_path_buf()
            }
            None => Self::default_config_path()?,
        };

        let config = if config_file.exists() {
            let content = fs::read_to_string(&config_file)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        ConfigBuilder::from_config(config).load_from_env()?.build()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let project_dirs =
            ProjectDirs::from("kr", "karaoke", "karaoke-search").ok_or(ConfigError::ProjectDirs)?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints_point_at_catalog_sites() {
        let config = Config::default();
        assert_eq!(config.tj_base_url, "https://www.tjmedia.com/song/accompaniment_search");
        assert_eq!(config.ky_base_url, "https://kysing.kr/search/");
        assert_eq!(config.request_timeout_seconds, 10);
    }

    #[test]
    fn test_save_and_load_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            tj_base_url: "http://localhost:9001/tj".to_string(),
            request_timeout_seconds: 42,
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.tj_base_url, "http://localhost:9001/tj");
        assert_eq!(loaded.request_timeout_seconds, 42);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str("request_timeout_seconds = 3\n").unwrap();
        assert_eq!(config.request_timeout_seconds, 3);
        assert_eq!(config.tj_base_url, tj::DEFAULT_BASE_URL);
        assert_eq!(config.bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn test_load_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(
            result,
            Err(crate::error::KaraokeError::Config(ConfigError::FileNotFound { .. }))
        ));
    }
}
