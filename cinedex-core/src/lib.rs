//! Remote catalog gateway for Cinedex.
//!
//! Wraps the third-party movie metadata service behind the
//! [`CatalogProvider`] trait: free-text search and single-item fetch,
//! nothing else. No retries, no caching, no timeout policy beyond the
//! transport default; failures propagate to the caller uninterpreted.

pub mod config;
pub mod error;
pub mod providers;

pub use config::{ConfigError, TmdbConfig};
pub use error::ProviderError;
pub use providers::{CatalogProvider, TmdbProvider};
