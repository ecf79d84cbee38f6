//! Kumyoung (KY) song search

use async_trait::async_trait;
use std::sync::Arc;

use super::markup::{ListingRules, ListingSelectors};
use super::provider::{MarkupCatalog, ProviderLog, SearchProvider};
use super::transport::HttpFetch;
use crate::core::song::Song;
use crate::error::MarkupError;

pub const PROVIDER_NAME: &str = "KY";
pub const DEFAULT_BASE_URL: &str = "https://kysing.kr/search/";

const LABEL: &str = "KY (Kumyoung)";

// Chart rows without the `songseq[]` checkbox are headers, not songs.
const SELECTORS: ListingSelectors<'static> = ListingSelectors {
    no_results: &["div.search_result_empty", "p.no_results"],
    entries: "div.search_daily_chart_wrap > ul.search_chart_list",
    entry_guard: Some(r#"input[name="songseq[]"]"#),
    song_id: "li.search_chart_num",
    title: "li.search_chart_tit > span.tit",
    singer: "li.search_chart_sng",
    lyricist: "li.search_chart_wrt",
    composer: "li.search_chart_cmp",
    snippet_len: 150,
};

pub struct KyProvider {
    catalog: MarkupCatalog,
}

impl KyProvider {
    pub fn new(fetcher: Arc<dyn HttpFetch>, log: Arc<dyn ProviderLog>) -> Result<Self, MarkupError> {
        let rules = ListingRules::compile(&SELECTORS)?;
        Ok(Self {
            catalog: MarkupCatalog::new(LABEL, fetcher, log, rules),
        })
    }

    /// Category 7 is the combined title/singer search; always the first page.
    fn query_params(keyword: &str) -> Vec<(&'static str, String)> {
        vec![
            ("category", "7".to_string()),
            ("keyword", keyword.to_string()),
            ("s_page", "1".to_string()),
        ]
    }
}

#[async_trait]
impl SearchProvider for KyProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn search(&self, keyword: &str) -> Vec<Song> {
        self.catalog
            .search(keyword, &Self::query_params(keyword))
            .await
    }
}
