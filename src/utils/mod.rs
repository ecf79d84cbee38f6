//! Utility modules for common functionality
//!
//! - `logging`: Logging configuration and setup
//! - `progress`: Spinner utilities for consistent CLI feedback
//! - `table`: Column fitting for terminal tables

pub mod logging;
pub mod progress;
pub mod table;
