//! Selector-driven extraction of song listings from search result pages
//!
//! Every provider renders its results as a repeating block of markup. A
//! provider describes where those blocks are with a [`ListingSelectors`]
//! table; [`ListingRules::extract`] does the walking and reports what it saw
//! without deciding how loudly to complain about it.

use scraper::{ElementRef, Html, Selector};

use crate::core::song::Song;
use crate::error::MarkupError;

/// Raw selector table for one provider's results page.
#[derive(Debug, Clone, Copy)]
pub struct ListingSelectors<'a> {
    /// Any match means the page is a "nothing found" page
    pub no_results: &'a [&'a str],
    /// One match per song entry
    pub entries: &'a str,
    /// Entries without a descendant matching this are ignored
    pub entry_guard: Option<&'a str>,
    pub song_id: &'a str,
    pub title: &'a str,
    pub singer: &'a str,
    pub lyricist: &'a str,
    pub composer: &'a str,
    /// Characters of entry markup kept for diagnostics
    pub snippet_len: usize,
}

/// Compiled form of [`ListingSelectors`].
#[derive(Debug, Clone)]
pub struct ListingRules {
    no_results: Vec<Selector>,
    entries: Selector,
    entry_guard: Option<Selector>,
    song_id: Selector,
    title: Selector,
    singer: Selector,
    lyricist: Selector,
    composer: Selector,
    snippet_len: usize,
}

/// What a results page contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    NoResults,
    ListNotFound,
    Entries(Vec<Entry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Song(Song),
    Incomplete(IncompleteEntry),
}

/// An entry lacking its id and/or title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteEntry {
    pub missing_id: bool,
    pub missing_title: bool,
    pub snippet: String,
}

impl IncompleteEntry {
    pub fn missing_fields(&self) -> String {
        let mut fields = Vec::new();
        if self.missing_id {
            fields.push("songId");
        }
        if self.missing_title {
            fields.push("title");
        }
        fields.join(", ")
    }
}

pub fn compile_selector(selector: &str) -> Result<Selector, MarkupError> {
    Selector::parse(selector).map_err(|e| MarkupError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

impl ListingRules {
    pub fn compile(selectors: &ListingSelectors<'_>) -> Result<Self, MarkupError> {
        let no_results = selectors
            .no_results
            .iter()
            .map(|s| compile_selector(s))
            .collect::<Result<Vec<_>, _>>()?;

        let entry_guard = selectors.entry_guard.map(compile_selector).transpose()?;

        Ok(Self {
            no_results,
            entries: compile_selector(selectors.entries)?,
            entry_guard,
            song_id: compile_selector(selectors.song_id)?,
            title: compile_selector(selectors.title)?,
            singer: compile_selector(selectors.singer)?,
            lyricist: compile_selector(selectors.lyricist)?,
            composer: compile_selector(selectors.composer)?,
            snippet_len: selectors.snippet_len,
        })
    }

    pub fn extract(&self, html: &str) -> Listing {
        let document = Html::parse_document(html);

        if self
            .no_results
            .iter()
            .any(|marker| document.select(marker).next().is_some())
        {
            return Listing::NoResults;
        }

        let entries: Vec<Entry> = document
            .select(&self.entries)
            .filter(|node| self.passes_guard(*node))
            .map(|node| self.extract_entry(node))
            .collect();

        if entries.is_empty() {
            return Listing::ListNotFound;
        }

        Listing::Entries(entries)
    }

    fn passes_guard(&self, node: ElementRef<'_>) -> bool {
        match &self.entry_guard {
            Some(guard) => node.select(guard).next().is_some(),
            None => true,
        }
    }

    fn extract_entry(&self, node: ElementRef<'_>) -> Entry {
        let song_id = field_text(node, &self.song_id).filter(|s| !s.is_empty());
        let title = field_text(node, &self.title).filter(|s| !s.is_empty());

        match (song_id, title) {
            (Some(song_id), Some(title)) => Entry::Song(Song {
                song_id,
                title,
                singer: field_text(node, &self.singer).unwrap_or_default(),
                lyricist: field_text(node, &self.lyricist).unwrap_or_default(),
                composer: field_text(node, &self.composer).unwrap_or_default(),
            }),
            (song_id, title) => Entry::Incomplete(IncompleteEntry {
                missing_id: song_id.is_none(),
                missing_title: title.is_none(),
                snippet: node.inner_html().chars().take(self.snippet_len).collect(),
            }),
        }
    }
}

/// Text of the first match under `node`, whitespace runs collapsed.
fn field_text(node: ElementRef<'_>, selector: &Selector) -> Option<String> {
    node.select(selector).next().map(|el| {
        el.text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    })
}
