//! Knowledge ingestion pipeline.
//!
//! Reads the knowledge file, chunks it, embeds every chunk, and writes
//! the result to the vector index. Re-running ingestion resets the index
//! and replaces its contents; it never appends to a previous run.

use crate::embeddings::{create_provider, EmbeddingConfig};
use crate::progress::ProgressReporter;
use crate::types::{IngestOptions, IngestStats, KnowledgeChunk};
use crate::{chunker, config, index};
use campus_core::config::RagConfig;
use campus_core::{AppError, AppResult};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::Instant;

/// Ingest a knowledge file into the vector index.
///
/// If the file cannot be read, the error is returned before anything is
/// written; a previously built index stays untouched.
pub async fn ingest(
    workspace: &Path,
    options: &IngestOptions,
    rag: &RagConfig,
    progress: &ProgressReporter,
) -> AppResult<IngestStats> {
    let start = Instant::now();

    tracing::info!("Starting ingest of {:?}", options.knowledge_file);

    // 1. Read the knowledge file. Failure here aborts before any state
    //    is created or modified.
    let text = std::fs::read_to_string(&options.knowledge_file).map_err(|e| {
        AppError::Knowledge(format!(
            "Failed to read knowledge file {:?}: {}",
            options.knowledge_file, e
        ))
    })?;

    let bytes_processed = text.len() as u64;
    progress.read(bytes_processed, &options.knowledge_file.display().to_string());

    let source = options
        .knowledge_file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| options.knowledge_file.display().to_string());

    // 2. Split into overlapping chunks
    let candidates = chunker::chunk_text(&text, rag.chunk_size, rag.chunk_overlap)?;
    progress.chunk(candidates.len() as u64);

    // 3. Create the embedding provider and embed in batches
    let embedding_config = EmbeddingConfig::load(workspace)?;
    let provider = create_provider(&embedding_config).await?;

    let texts: Vec<String> = candidates.iter().map(|c| c.text.clone()).collect();
    let total = texts.len() as u64;

    let mut embeddings = Vec::with_capacity(texts.len());
    for batch in texts.chunks(embedding_config.batch_size.max(1)) {
        let mut batch_embeddings = provider.embed_batch(batch).await?;
        embeddings.append(&mut batch_embeddings);
        progress.embed(embeddings.len() as u64, total, provider.model_name());
    }

    // 4. Replace the index contents
    let index_path = config::get_index_path(workspace);
    let conn = index::open_index(&index_path)?;
    index::reset_index(&conn)?;

    let mut chunks_count = 0u32;
    for (candidate, embedding) in candidates.into_iter().zip(embeddings) {
        let hash = format!("{:x}", Sha256::digest(candidate.text.as_bytes()));

        let chunk = KnowledgeChunk {
            id: uuid::Uuid::new_v4().to_string(),
            source: source.clone(),
            position: candidate.position,
            text: candidate.text,
            embedding: Some(embedding),
            metadata: serde_json::json!({
                "byte_range": [candidate.byte_range.0, candidate.byte_range.1],
                "hash": hash,
            }),
        };

        index::insert_chunk(&conn, &chunk)?;
        chunks_count += 1;
        progress.index(chunks_count as u64, total);
    }

    // 5. Persist the embedding config so query time uses the same model
    embedding_config.save(workspace)?;

    let duration = start.elapsed();

    tracing::info!(
        "Ingest completed: {} chunks, {} bytes in {:.2}s",
        chunks_count,
        bytes_processed,
        duration.as_secs_f64()
    );

    Ok(IngestStats {
        chunks_count,
        bytes_processed,
        duration_secs: duration.as_secs_f64(),
    })
}
