//! Knowledge base for the campus assistant.
//!
//! Local-first RAG: a text knowledge file is chunked, embedded, and
//! persisted in a SQLite-backed vector index under `.campus/`; questions
//! are answered from the top-k nearest chunks.

pub mod chunker;
pub mod config;
pub mod embeddings;
pub mod index;
pub mod ingest;
pub mod progress;
pub mod rag;
pub mod retriever;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use ingest::ingest;
pub use retriever::Retriever;
pub use types::{
    ChunkCandidate, IndexStats, IngestOptions, IngestStats, KnowledgeChunk, RetrievalResult,
};

use campus_core::{AppError, AppResult};
use std::path::Path;

/// Get statistics for the persisted index.
pub fn stats(workspace: &Path) -> AppResult<IndexStats> {
    let index_path = config::get_index_path(workspace);
    if !index_path.exists() {
        return Err(AppError::Knowledge(
            "No index found. Run 'campus ingest' first.".to_string(),
        ));
    }

    let conn = index::open_index(&index_path)?;
    let chunks_count = index::count_chunks(&conn)?;
    let db_size_bytes = std::fs::metadata(&index_path).map(|m| m.len()).unwrap_or(0);

    Ok(IndexStats {
        chunks_count,
        db_size_bytes,
    })
}
