//! Embedding generation for knowledge chunks and queries.
//!
//! The same provider instance must embed both the ingested chunks and the
//! query text; the active configuration is persisted next to the index at
//! ingest time and reloaded at query time to keep the vector space
//! consistent.

pub mod config;
pub mod provider;
pub mod providers;

pub use config::EmbeddingConfig;
pub use provider::{create_provider, EmbeddingProvider};
