//! TJ Media accompaniment search

use async_trait::async_trait;
use std::sync::Arc;

use super::markup::{ListingRules, ListingSelectors};
use super::provider::{MarkupCatalog, ProviderLog, SearchProvider};
use super::transport::HttpFetch;
use crate::core::song::Song;
use crate::error::MarkupError;

pub const PROVIDER_NAME: &str = "TJ";
pub const DEFAULT_BASE_URL: &str = "https://www.tjmedia.com/song/accompaniment_search";

const LABEL: &str = "TJ Media";

const SELECTORS: ListingSelectors<'static> = ListingSelectors {
    no_results: &["div.music-search-list > p.nodata", "p.no-date"],
    entries: "ul.chart-list-area.music.type-a.type-b > li > ul.grid-container.list.ico",
    entry_guard: None,
    song_id: "li.grid-item.center.pos-type span.num2",
    title: "li.grid-item.title3 div.flex-box > p > span",
    singer: "li.grid-item.title4.singer p > span",
    lyricist: "li.grid-item.title5 p > span",
    composer: "li.grid-item.title6 p > span",
    snippet_len: 100,
};

pub struct TjProvider {
    catalog: MarkupCatalog,
}

impl TjProvider {
    pub fn new(fetcher: Arc<dyn HttpFetch>, log: Arc<dyn ProviderLog>) -> Result<Self, MarkupError> {
        let rules = ListingRules::compile(&SELECTORS)?;
        Ok(Self {
            catalog: MarkupCatalog::new(LABEL, fetcher, log, rules),
        })
    }

    /// First page, up to 1000 rows, ascending, domestic catalog, searched by
    /// title. `strSotrGubun` is the upstream spelling.
    fn query_params(keyword: &str) -> Vec<(&'static str, String)> {
        vec![
            ("pageNo", "1".to_string()),
            ("pageRowCnt", "1000".to_string()),
            ("strSotrGubun", "ASC".to_string()),
            ("strSortType", String::new()),
            ("nationType", "KOR".to_string()),
            ("strType", "2".to_string()),
            ("searchTxt", keyword.to_string()),
        ]
    }
}

#[async_trait]
impl SearchProvider for TjProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn search(&self, keyword: &str) -> Vec<Song> {
        self.catalog
            .search(keyword, &Self::query_params(keyword))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::testing::{LogLevel, RecordingLog, StaticFetcher};

    struct SongRow<'a> {
        song_id: &'a str,
        title: &'a str,
        singer: &'a str,
        lyricist: &'a str,
        composer: &'a str,
    }

    fn results_page(rows: &[SongRow<'_>]) -> String {
        let items: String = rows
            .iter()
            .map(|row| {
                format!(
                    r#"<li>
    <ul class="grid-container list ico">
        <li class="grid-item center pos-type"><p class="count"><span class="num2">{}</span></p></li>
        <li class="grid-item title3"><div class="flex-box"><p><span>{}</span></p></div></li>
        <li class="grid-item title4 singer"><p><span>{}</span></p></li>
        <li class="grid-item title5"><p><span>{}</span></p></li>
        <li class="grid-item title6"><p><span>{}</span></p></li>
    </ul>
</li>"#,
                    row.song_id, row.title, row.singer, row.lyricist, row.composer
                )
            })
            .collect();

        format!(
            r#"<html><body><ul class="chart-list-area music type-a type-b">{}</ul></body></html>"#,
            items
        )
    }

    fn no_results_page() -> String {
        r#"<html><body>
    <div class="music-search-list type2 pd-120">
        <ul class="chart-list-area music type-a type-b">
            <li><p class="no-date">검색 결과를 찾을 수 없습니다.</p></li>
        </ul>
    </div>
</body></html>"#
            .to_string()
    }

    fn provider(fetcher: StaticFetcher) -> (TjProvider, Arc<StaticFetcher>, Arc<RecordingLog>) {
        let fetcher = Arc::new(fetcher);
        let log = Arc::new(RecordingLog::default());
        let provider = TjProvider::new(fetcher.clone(), log.clone()).unwrap();
        (provider, fetcher, log)
    }

    const IU_ROWS: [SongRow<'static>; 2] = [
        SongRow {
            song_id: "85842",
            title: "Love wins all",
            singer: "IU",
            lyricist: "아이유",
            composer: "서동환",
        },
        SongRow {
            song_id: "33393",
            title: "좋은날",
            singer: "IU",
            lyricist: "김이나",
            composer: "이민수",
        },
    ];

    #[tokio::test]
    async fn test_search_parses_songs_in_source_order() {
        let (provider, _, log) = provider(StaticFetcher::body(results_page(&IU_ROWS)));

        let songs = provider.search("아이유").await;

        assert_eq!(songs.len(), 2);
        assert_eq!(
            songs[0],
            Song::new("85842", "Love wins all")
                .with_singer("IU")
                .with_composer("서동환")
                .with_lyricist("아이유")
        );
        assert_eq!(
            songs[1],
            Song::new("33393", "좋은날")
                .with_singer("IU")
                .with_composer("이민수")
                .with_lyricist("김이나")
        );
        assert!(log.events().is_empty());
    }

    #[tokio::test]
    async fn test_search_sends_upstream_query_params() {
        let (provider, fetcher, _) = provider(StaticFetcher::body(results_page(&IU_ROWS)));

        provider.search(" 아이유 ").await;

        let requests = fetcher.requests();
        assert_eq!(requests.len(), 1);
        let expected: Vec<(String, String)> = [
            ("pageNo", "1"),
            ("pageRowCnt", "1000"),
            ("strSotrGubun", "ASC"),
            ("strSortType", ""),
            ("nationType", "KOR"),
            ("strType", "2"),
            ("searchTxt", " 아이유 "),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(requests[0], expected);
    }

    #[tokio::test]
    async fn test_search_no_results_page_logs_once_at_info() {
        let (provider, _, log) = provider(StaticFetcher::body(no_results_page()));

        let songs = provider.search("없는노래").await;

        assert!(songs.is_empty());
        assert_eq!(
            log.events(),
            vec![(LogLevel::Info, "TJ Media reported no search results".to_string())]
        );
    }

    #[tokio::test]
    async fn test_search_nodata_marker_is_no_results() {
        let page = r#"<div class="music-search-list"><p class="nodata">없음</p></div>"#;
        let (provider, _, log) = provider(StaticFetcher::body(page));

        assert!(provider.search("x").await.is_empty());
        assert_eq!(log.count(LogLevel::Info), 1);
    }

    #[tokio::test]
    async fn test_search_absent_body_logs_empty_body() {
        let (provider, _, log) = provider(StaticFetcher::absent());

        let songs = provider.search("아이유").await;

        assert!(songs.is_empty());
        assert_eq!(
            log.events(),
            vec![(LogLevel::Warn, "TJ Media response body was empty".to_string())]
        );
    }

    #[tokio::test]
    async fn test_search_blank_body_logs_empty_body() {
        let (provider, _, log) = provider(StaticFetcher::body("  \n\t "));

        assert!(provider.search("아이유").await.is_empty());
        assert_eq!(log.count(LogLevel::Warn), 1);
        assert_eq!(log.events().len(), 1);
    }

    #[tokio::test]
    async fn test_search_transport_failure_logs_error_with_keyword() {
        let (provider, _, log) = provider(StaticFetcher::unavailable());

        let songs = provider.search("오류유발").await;

        assert!(songs.is_empty());
        let events = log.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, LogLevel::Error);
        assert!(events[0].1.contains("keyword='오류유발'"));
        assert!(events[0].1.contains("503"));
    }

    #[tokio::test]
    async fn test_search_unknown_layout_is_list_not_found() {
        let (provider, _, log) =
            provider(StaticFetcher::body("<html><body><div class=\"renewal\"></div></body></html>"));

        assert!(provider.search("아이유").await.is_empty());
        let events = log.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, LogLevel::Info);
        assert!(events[0].1.contains("song list not found"));
    }

    #[tokio::test]
    async fn test_search_drops_entry_missing_song_id() {
        let rows = [
            SongRow {
                song_id: "",
                title: "번호없음",
                singer: "IU",
                lyricist: "",
                composer: "",
            },
            SongRow {
                song_id: "33393",
                title: "좋은날",
                singer: "IU",
                lyricist: "김이나",
                composer: "이민수",
            },
        ];
        let (provider, _, log) = provider(StaticFetcher::body(results_page(&rows)));

        let songs = provider.search("아이유").await;

        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].song_id, "33393");
        let events = log.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, LogLevel::Warn);
        assert!(events[0].1.contains("field(s): songId;"));
        assert!(events[0].1.contains("num2"));
    }

    #[tokio::test]
    async fn test_search_defaults_missing_optional_fields() {
        let page = r#"<ul class="chart-list-area music type-a type-b"><li>
            <ul class="grid-container list ico">
                <li class="grid-item center pos-type"><span class="num2">100</span></li>
                <li class="grid-item title3"><div class="flex-box"><p><span>제목만</span></p></div></li>
            </ul>
        </li></ul>"#;
        let (provider, _, log) = provider(StaticFetcher::body(page));

        let songs = provider.search("제목").await;

        assert_eq!(songs, vec![Song::new("100", "제목만")]);
        assert!(log.events().is_empty());
    }
}
