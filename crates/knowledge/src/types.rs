//! Knowledge system type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A text chunk with its embedding, as stored in the vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeChunk {
    /// Unique chunk identifier
    pub id: String,

    /// Provenance: name of the source file the chunk came from
    pub source: String,

    /// Position within the source (0-indexed)
    pub position: u32,

    /// Text content
    pub text: String,

    /// Embedding vector (normalized)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,

    /// Metadata (byte range, content hash)
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Internal chunk candidate before embedding.
#[derive(Debug, Clone)]
pub struct ChunkCandidate {
    pub position: u32,
    pub text: String,
    pub byte_range: (usize, usize),
}

/// Options for the ingest operation.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Path to the UTF-8 knowledge file
    pub knowledge_file: PathBuf,
}

/// Statistics from an ingest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestStats {
    /// Number of chunks stored
    pub chunks_count: u32,

    /// Bytes of source text processed
    pub bytes_processed: u64,

    /// Duration in seconds
    pub duration_secs: f64,
}

/// Result of a retrieval, chunks in descending similarity order.
#[derive(Debug, Clone)]
pub struct RetrievalResult {
    /// Retrieved chunks (most similar first)
    pub chunks: Vec<KnowledgeChunk>,

    /// Cosine similarity scores, parallel to `chunks`
    pub scores: Vec<f32>,
}

/// Statistics for the persisted index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of stored chunks
    pub chunks_count: u32,

    /// Index size on disk in bytes
    pub db_size_bytes: u64,
}
