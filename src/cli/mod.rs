//! Command Line Interface module
//!
//! - `core`: catalog search and provider listing
//! - `operations`: long-running operations (HTTP server)
//! - `management`: configuration inspection

pub mod core;
pub mod operations;
pub mod management;
