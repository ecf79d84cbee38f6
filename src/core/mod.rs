//! Core functionality modules
//!
//! - `song`: the record every provider produces
//! - `services`: karaoke catalog providers and their collaborators
//! - `search`: name-based dispatch to a provider

pub mod search;
pub mod services;
pub mod song;

// Re-export commonly used types for convenience
pub use search::KaraokeSearchService;
pub use song::Song;
