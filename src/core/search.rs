use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::services::SearchProvider;
use crate::core::song::Song;
use crate::error::{KaraokeError, Result};

/// Routes a search to the provider registered under the requested name.
///
/// Names are matched case-insensitively. The mapping is fixed at
/// construction.
#[derive(Clone)]
pub struct KaraokeSearchService {
    providers: Arc<HashMap<String, Arc<dyn SearchProvider>>>,
}

impl KaraokeSearchService {
    /// Register every provider under its uppercased name. A later provider
    /// replaces an earlier one with the same normalized name.
    pub fn new(providers: Vec<Arc<dyn SearchProvider>>) -> Self {
        let mut map: HashMap<String, Arc<dyn SearchProvider>> = HashMap::new();

        for provider in providers {
            let key = provider.provider_name().to_uppercase();
            if map.insert(key.clone(), provider).is_some() {
                warn!("Duplicate karaoke provider name '{}'; the last registration wins", key);
            }
        }

        Self {
            providers: Arc::new(map),
        }
    }

    /// Search `keyword` with the provider called `provider_name`.
    ///
    /// Fails only with [`KaraokeError::UnsupportedProvider`]; provider-side
    /// failures come back as an empty list.
    pub async fn search(&self, provider_name: &str, keyword: &str) -> Result<Vec<Song>> {
        let provider = self
            .providers
            .get(&provider_name.to_uppercase())
            .ok_or_else(|| KaraokeError::unsupported_provider(provider_name))?;

        debug!("Dispatching search to {}: keyword='{}'", provider.provider_name(), keyword);
        Ok(provider.search(keyword).await)
    }

    /// Registered provider names, sorted.
    pub fn providers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }
}
