use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::error::NetworkError;

/// GET capability bound to one provider endpoint.
///
/// `Ok(None)` means the server answered without a body.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn fetch(&self, params: &[(&str, String)]) -> Result<Option<String>, NetworkError>;

    /// Endpoint the fetcher is bound to, for diagnostics
    fn endpoint(&self) -> &str;
}

#[derive(Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestFetcher {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build a dedicated client with the given timeout and User-Agent.
    pub fn with_settings(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, NetworkError> {
        let base_url = base_url.into();
        url::Url::parse(&base_url).map_err(|e| NetworkError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self::new(client, base_url))
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn fetch(&self, params: &[(&str, String)]) -> Result<Option<String>, NetworkError> {
        debug!("GET {} with params: {:?}", self.base_url, params);

        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
                url: self.base_url.clone(),
            });
        }

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.text().await?;
        Ok(Some(body))
    }

    fn endpoint(&self) -> &str {
        &self.base_url
    }
}
