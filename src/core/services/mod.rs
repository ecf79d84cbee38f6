//! Karaoke catalog integrations
//!
//! - `provider`: the `SearchProvider` contract and the shared fetch/extract flow
//! - `transport`: HTTP fetch capability bound to one endpoint
//! - `markup`: selector-driven listing extraction
//! - `tj`, `ky`: the concrete catalogs

pub mod ky;
pub mod markup;
pub mod provider;
pub mod tj;
pub mod transport;

#[cfg(test)]
pub mod testing;

// Re-export main types
pub use ky::KyProvider;
pub use provider::{ProviderLog, SearchProvider, TracingLog};
pub use tj::TjProvider;
pub use transport::{HttpFetch, ReqwestFetcher};
