//! Service layer for dependency injection
//!
//! `ServiceFactory` turns a `Config` into HTTP clients, providers and the
//! search dispatcher. Commands go through it instead of wiring providers by
//! hand.

pub mod factory;

pub use factory::ServiceFactory;
