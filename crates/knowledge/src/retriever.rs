//! Query-side access to the persisted vector index.
//!
//! A [`Retriever`] bundles the index connection and the embedding
//! provider. Both are created once and reused for every question in a
//! session; access is single-threaded within a session.

use crate::embeddings::{create_provider, EmbeddingConfig, EmbeddingProvider};
use crate::types::RetrievalResult;
use crate::{config, index};
use campus_core::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

/// Read-side handle over the vector index.
pub struct Retriever {
    conn: Connection,
    provider: Arc<dyn EmbeddingProvider>,
    embedding_config: EmbeddingConfig,
}

impl Retriever {
    /// Open the index of a workspace.
    ///
    /// The embedding provider is built from the configuration persisted
    /// at ingest time, so queries always use the same vector space as
    /// the stored chunks.
    pub async fn open(workspace: &Path) -> AppResult<Self> {
        let index_path = config::get_index_path(workspace);
        if !index_path.exists() {
            return Err(AppError::Knowledge(
                "No index found. Run 'campus ingest' first.".to_string(),
            ));
        }

        let embedding_config = EmbeddingConfig::load(workspace)?;
        let provider = create_provider(&embedding_config).await?;
        let conn = index::open_index(&index_path)?;

        tracing::debug!(
            "Opened retriever (provider: {}, model: {}, {} dims)",
            provider.provider_name(),
            provider.model_name(),
            provider.dimensions()
        );

        Ok(Self {
            conn,
            provider,
            embedding_config,
        })
    }

    /// Retrieve the top-k most similar chunks for a question.
    ///
    /// Chunks come back in descending similarity order. An empty result
    /// is not an error; the caller decides what an empty context means.
    pub async fn retrieve(&self, query: &str, top_k: u32) -> AppResult<RetrievalResult> {
        tracing::info!("Retrieving top-{} chunks for query", top_k);

        let query_embedding = self.provider.embed(query).await?;
        let results = index::query_chunks(&self.conn, &query_embedding, top_k as usize)?;

        let (chunks, scores): (Vec<_>, Vec<_>) = results.into_iter().unzip();

        if chunks.is_empty() {
            tracing::info!("Retrieval found no chunks");
        } else {
            tracing::debug!(
                "Retrieved {} chunks (top score: {:.3})",
                chunks.len(),
                scores.first().copied().unwrap_or(0.0)
            );
        }

        Ok(RetrievalResult { chunks, scores })
    }

    /// The embedding configuration the index was built with.
    pub fn embedding_config(&self) -> &EmbeddingConfig {
        &self.embedding_config
    }
}
