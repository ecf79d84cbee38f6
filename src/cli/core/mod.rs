//! Core CLI commands
//!
//! Searching one karaoke catalog and listing the catalogs that can be searched.

pub mod search;
pub mod providers;
