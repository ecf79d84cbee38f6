use async_trait::async_trait;
use std::sync::Arc;

use super::markup::{Entry, IncompleteEntry, Listing, ListingRules};
use super::transport::HttpFetch;
use crate::core::song::Song;
use crate::error::NetworkError;

/// A karaoke catalog that can be searched by keyword.
///
/// `search` never fails: transport errors, empty pages and unexpected markup
/// all come back as an empty list, with the reason written to the provider's
/// log instead.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Unique name, e.g. `"TJ"` or `"KY"`
    fn provider_name(&self) -> &'static str;

    async fn search(&self, keyword: &str) -> Vec<Song>;
}

/// Leveled diagnostics sink handed to each provider.
pub trait ProviderLog: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// `ProviderLog` backed by `tracing`, tagged with the provider name.
#[derive(Debug, Clone, Copy)]
pub struct TracingLog {
    provider: &'static str,
}

impl TracingLog {
    pub fn new(provider: &'static str) -> Self {
        Self { provider }
    }
}

impl ProviderLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(provider = self.provider, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(provider = self.provider, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(provider = self.provider, "{}", message);
    }
}

/// Why a search produced nothing.
#[derive(Debug)]
enum SearchFailure {
    EmptyBody,
    NoResults,
    ListNotFound,
    Transport(NetworkError),
}

/// Fetch-then-extract flow shared by the markup-scraping providers.
pub struct MarkupCatalog {
    label: &'static str,
    fetcher: Arc<dyn HttpFetch>,
    log: Arc<dyn ProviderLog>,
    rules: ListingRules,
}

impl MarkupCatalog {
    pub fn new(
        label: &'static str,
        fetcher: Arc<dyn HttpFetch>,
        log: Arc<dyn ProviderLog>,
        rules: ListingRules,
    ) -> Self {
        Self {
            label,
            fetcher,
            log,
            rules,
        }
    }

    /// Run one search and collapse every failure into an empty list.
    pub async fn search(&self, keyword: &str, params: &[(&str, String)]) -> Vec<Song> {
        match self.try_search(params).await {
            Ok(songs) => songs,
            Err(failure) => {
                self.report(keyword, failure);
                Vec::new()
            }
        }
    }

    async fn try_search(&self, params: &[(&str, String)]) -> Result<Vec<Song>, SearchFailure> {
        let body = self
            .fetcher
            .fetch(params)
            .await
            .map_err(SearchFailure::Transport)?;

        let body = match body {
            Some(body) if !body.trim().is_empty() => body,
            _ => return Err(SearchFailure::EmptyBody),
        };

        match self.rules.extract(&body) {
            Listing::NoResults => Err(SearchFailure::NoResults),
            Listing::ListNotFound => Err(SearchFailure::ListNotFound),
            Listing::Entries(entries) => Ok(entries
                .into_iter()
                .filter_map(|entry| match entry {
                    Entry::Song(song) => Some(song),
                    Entry::Incomplete(incomplete) => {
                        self.report_incomplete(&incomplete);
                        None
                    }
                })
                .collect()),
        }
    }

    fn report(&self, keyword: &str, failure: SearchFailure) {
        match failure {
            SearchFailure::EmptyBody => {
                self.log.warn(&format!("{} response body was empty", self.label));
            }
            SearchFailure::NoResults => {
                self.log.info(&format!("{} reported no search results", self.label));
            }
            SearchFailure::ListNotFound => {
                self.log.info(&format!(
                    "{} song list not found; the page layout may have changed or this is another kind of empty page",
                    self.label
                ));
            }
            SearchFailure::Transport(err) => {
                self.log.error(&format!(
                    "{} search failed: keyword='{}', endpoint={}, cause: {}",
                    self.label,
                    keyword,
                    self.fetcher.endpoint(),
                    err
                ));
            }
        }
    }

    fn report_incomplete(&self, incomplete: &IncompleteEntry) {
        self.log.warn(&format!(
            "{} entry missing required field(s): {}; skipping. Markup: {}...",
            self.label,
            incomplete.missing_fields(),
            incomplete.snippet
        ));
    }
}
