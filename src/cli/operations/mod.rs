//! Long-running operations

pub mod serve;
