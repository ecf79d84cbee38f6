use std::net::SocketAddr;
use url::Url;
use crate::error::{Result, KaraokeError};

/// Centralized configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate an absolute http(s) URL
    pub fn validate_url(url: &str, field_name: &str) -> Result<()> {
        let parsed = Url::parse(url).map_err(|e| {
            KaraokeError::Validation(format!("Invalid {} URL '{}': {}", field_name, url, e))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(KaraokeError::Validation(format!(
                "{} URL must use http or https, got: {}",
                field_name, url
            )));
        }

        Ok(())
    }

    /// Validate numeric range
    pub fn validate_range<T>(value: T, min: T, max: T, field_name: &str) -> Result<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(KaraokeError::Validation(format!(
                "{} must be between {} and {}, got {}",
                field_name, min, max, value
            )));
        }
        Ok(())
    }

    /// Validate a `host:port` listen address
    pub fn validate_socket_addr(addr: &str, field_name: &str) -> Result<()> {
        addr.parse::<SocketAddr>().map_err(|e| {
            KaraokeError::Validation(format!("Invalid {} '{}': {}", field_name, addr, e))
        })?;
        Ok(())
    }

    pub fn validate_not_blank(value: &str, field_name: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(KaraokeError::Validation(format!("{} must not be empty", field_name)));
        }
        Ok(())
    }
}
