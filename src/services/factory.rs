use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::core::search::KaraokeSearchService;
use crate::core::services::{ky, tj, KyProvider, ReqwestFetcher, SearchProvider, TjProvider, TracingLog};
use crate::error::Result;

/// Centralized factory for creating all core services
/// Each provider gets its own HTTP client bound to its own endpoint
pub struct ServiceFactory {
    config: Arc<Config>,
}

impl ServiceFactory {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Create a fetcher for one catalog endpoint with the configured timeout
    /// and User-Agent
    pub fn create_fetcher(&self, base_url: &str) -> Result<ReqwestFetcher> {
        let fetcher = ReqwestFetcher::with_settings(
            base_url,
            Duration::from_secs(self.config.request_timeout_seconds),
            &self.config.user_agent,
        )?;
        Ok(fetcher)
    }

    pub fn create_tj_provider(&self) -> Result<TjProvider> {
        let fetcher = self.create_fetcher(&self.config.tj_base_url)?;
        let provider = TjProvider::new(Arc::new(fetcher), Arc::new(TracingLog::new(tj::PROVIDER_NAME)))?;
        Ok(provider)
    }

    pub fn create_ky_provider(&self) -> Result<KyProvider> {
        let fetcher = self.create_fetcher(&self.config.ky_base_url)?;
        let provider = KyProvider::new(Arc::new(fetcher), Arc::new(TracingLog::new(ky::PROVIDER_NAME)))?;
        Ok(provider)
    }

    /// Every provider this build knows about
    pub fn create_providers(&self) -> Result<Vec<Arc<dyn SearchProvider>>> {
        let tj: Arc<dyn SearchProvider> = Arc::new(self.create_tj_provider()?);
        let ky: Arc<dyn SearchProvider> = Arc::new(self.create_ky_provider()?);
        Ok(vec![tj, ky])
    }

    /// Create the dispatcher over all providers
    pub fn create_search_service(&self) -> Result<KaraokeSearchService> {
        let providers = self.create_providers()?;
        let service = KaraokeSearchService::new(providers);
        debug!("Registered karaoke providers: {:?}", service.providers());
        Ok(service)
    }

    /// Get configuration reference
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }
}
