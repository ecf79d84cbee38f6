use crate::config::env::{EnvParser, EnvVars};
use crate::config::validation::ConfigValidator;
use crate::config::Config;
use crate::error::Result;

const TIMEOUT_RANGE: (u64, u64) = (1, 300);

/// Configuration builder with validation and type safety
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    base: Config,
    tj_base_url: Option<String>,
    ky_base_url: Option<String>,
    request_timeout_seconds: Option<u64>,
    user_agent: Option<String>,
    bind_address: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder on top of the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already loaded configuration (e.g. the config file)
    pub fn from_config(base: Config) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Set TJ Media endpoint with validation
    pub fn tj_base_url<S: Into<String>>(mut self, url: S) -> Result<Self> {
        let url = url.into();
        ConfigValidator::validate_url(&url, "TJ base")?;
        self.tj_base_url = Some(url);
        Ok(self)
    }

    /// Set Kumyoung endpoint with validation
    pub fn ky_base_url<S: Into<String>>(mut self, url: S) -> Result<Self> {
        let url = url.into();
        ConfigValidator::validate_url(&url, "KY base")?;
        self.ky_base_url = Some(url);
        Ok(self)
    }

    /// Set request timeout with validation
    pub fn request_timeout_seconds(mut self, seconds: u64) -> Result<Self> {
        ConfigValidator::validate_range(seconds, TIMEOUT_RANGE.0, TIMEOUT_RANGE.1, "request timeout seconds")?;
        self.request_timeout_seconds = Some(seconds);
        Ok(self)
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Result<Self> {
        let user_agent = user_agent.into();
        ConfigValidator::validate_not_blank(&user_agent, "user agent")?;
        self.user_agent = Some(user_agent);
        Ok(self)
    }

    /// Set listen address with validation
    pub fn bind_address<S: Into<String>>(mut self, addr: S) -> Result<Self> {
        let addr = addr.into();
        ConfigValidator::validate_socket_addr(&addr, "bind address")?;
        self.bind_address = Some(addr);
        Ok(self)
    }

    /// Load values from environment variables with validation
    pub fn load_from_env(mut self) -> Result<Self> {
        if let Some(url) = EnvParser::parse_string(EnvVars::TJ_BASE_URL)? {
            self = self.tj_base_url(url)?;
        }

        if let Some(url) = EnvParser::parse_string(EnvVars::KY_BASE_URL)? {
            self = self.ky_base_url(url)?;
        }

        if let Some(seconds) =
            EnvParser::parse_u64(EnvVars::REQUEST_TIMEOUT_SECONDS, TIMEOUT_RANGE.0, TIMEOUT_RANGE.1)?
        {
            self = self.request_timeout_seconds(seconds)?;
        }

        if let Some(user_agent) = EnvParser::parse_string(EnvVars::USER_AGENT)? {
            self = self.user_agent(user_agent)?;
        }

        if let Some(addr) = EnvParser::parse_string(EnvVars::BIND_ADDRESS)? {
            self = self.bind_address(addr)?;
        }

        Ok(self)
    }

    /// Build the configuration, filling unset values from the base
    pub fn build(self) -> Result<Config> {
        let base = self.base;

        let config = Config {
            tj_base_url: self.tj_base_url.unwrap_or(base.tj_base_url),
            ky_base_url: self.ky_base_url.unwrap_or(base.ky_base_url),
            request_timeout_seconds: self
                .request_timeout_seconds
                .unwrap_or(base.request_timeout_seconds),
            user_agent: self.user_agent.unwrap_or(base.user_agent),
            bind_address: self.bind_address.unwrap_or(base.bind_address),
        };

        // Final validation
        config.validate()?;

        Ok(config)
    }
}

impl Config {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate_url(&self.tj_base_url, "TJ base")?;
        ConfigValidator::validate_url(&self.ky_base_url, "KY base")?;

        ConfigValidator::validate_range(
            self.request_timeout_seconds,
            TIMEOUT_RANGE.0,
            TIMEOUT_RANGE.1,
            "request timeout seconds",
        )?;

        ConfigValidator::validate_not_blank(&self.user_agent, "user agent")?;
        ConfigValidator::validate_socket_addr(&self.bind_address, "bind address")?;

        Ok(())
    }
}
