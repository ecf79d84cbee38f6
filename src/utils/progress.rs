use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Centralized spinner creation for CLI commands
pub struct ProgressUtils;

impl ProgressUtils {
    /// Spinner shown while a catalog request is in flight
    pub fn create_search_spinner(message: String) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("valid spinner template"),
        );
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

/// Common progress messages
pub struct ProgressMessages;

impl ProgressMessages {
    pub fn searching(provider: &str, keyword: &str) -> String {
        format!("🔍 Searching {} for \"{}\"...", provider, keyword)
    }

    pub fn found_count(count: usize) -> String {
        format!("🎤 Found {} song(s)", count)
    }
}
