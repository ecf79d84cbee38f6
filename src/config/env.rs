use std::env;
use crate::error::{Result, KaraokeError};

/// Environment variable configuration constants
pub struct EnvVars;

impl EnvVars {
    pub const TJ_BASE_URL: &'static str = "KARAOKE_TJ_BASE_URL";
    pub const KY_BASE_URL: &'static str = "KARAOKE_KY_BASE_URL";
    pub const REQUEST_TIMEOUT_SECONDS: &'static str = "KARAOKE_REQUEST_TIMEOUT_SECONDS";
    pub const USER_AGENT: &'static str = "KARAOKE_USER_AGENT";
    pub const BIND_ADDRESS: &'static str = "KARAOKE_BIND_ADDRESS";

    pub const PREFIX: &'static str = "KARAOKE_";

    pub fn all() -> [&'static str; 5] {
        [
            Self::TJ_BASE_URL,
            Self::KY_BASE_URL,
            Self::REQUEST_TIMEOUT_SECONDS,
            Self::USER_AGENT,
            Self::BIND_ADDRESS,
        ]
    }
}

/// Environment variable parsing utilities with validation
pub struct EnvParser;

impl EnvParser {
    /// Parse environment variable as a trimmed, non-empty string
    pub fn parse_string(var_name: &str) -> Result<Option<String>> {
        match env::var(var_name) {
            Ok(value) => {
                let trimmed = value.trim().to_string();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                Ok(Some(trimmed))
            }
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(KaraokeError::Validation(format!(
                "Environment variable {} contains invalid UTF-8",
                var_name
            ))),
        }
    }

    /// Parse environment variable as u64 with range validation
    pub fn parse_u64(var_name: &str, min: u64, max: u64) -> Result<Option<u64>> {
        if let Some(value_str) = Self::parse_string(var_name)? {
            let value = value_str.parse::<u64>().map_err(|_| {
                KaraokeError::Validation(format!(
                    "Invalid number in {}: '{}'. Must be a positive integer",
                    var_name, value_str
                ))
            })?;

            if value < min || value > max {
                return Err(KaraokeError::Validation(format!(
                    "Value in {} must be between {} and {}, got {}",
                    var_name, min, max, value
                )));
            }

            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    /// All KARAOKE_* variables currently set, for `config show`
    pub fn get_all_karaoke_vars() -> Vec<(String, String)> {
        let mut vars: Vec<(String, String)> = env::vars()
            .filter(|(key, _)| key.starts_with(EnvVars::PREFIX))
            .collect();
        vars.sort();
        vars
    }
}
