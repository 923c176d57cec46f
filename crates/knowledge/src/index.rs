//! SQLite-backed vector index for knowledge chunks.

use crate::types::KnowledgeChunk;
use campus_core::{AppError, AppResult};
use rusqlite::{params, Connection};
use std::path::Path;

/// Open (or create) the SQLite index database.
pub fn open_index(db_path: &Path) -> AppResult<Connection> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::Knowledge(format!("Failed to create index directory: {}", e)))?;
    }

    let conn = Connection::open(db_path)
        .map_err(|e| AppError::Knowledge(format!("Failed to open SQLite index: {}", e)))?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS chunks (
            id TEXT PRIMARY KEY,
            source TEXT NOT NULL,
            position INTEGER NOT NULL,
            text TEXT NOT NULL,
            embedding BLOB NOT NULL,
            metadata TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_chunks_source ON chunks(source);
        "#,
    )
    .map_err(|e| AppError::Knowledge(format!("Failed to create tables: {}", e)))?;

    tracing::debug!("Opened SQLite index at {:?}", db_path);
    Ok(conn)
}

/// Insert a chunk with its embedding into the index.
pub fn insert_chunk(conn: &Connection, chunk: &KnowledgeChunk) -> AppResult<()> {
    let embedding_bytes = embedding_to_bytes(
        chunk
            .embedding
            .as_ref()
            .ok_or_else(|| AppError::Knowledge("Chunk missing embedding".to_string()))?,
    );

    let metadata_json = serde_json::to_string(&chunk.metadata)
        .map_err(|e| AppError::Knowledge(format!("Failed to serialize metadata: {}", e)))?;

    conn.execute(
        "INSERT OR REPLACE INTO chunks (id, source, position, text, embedding, metadata)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            chunk.id,
            chunk.source,
            chunk.position as i64,
            chunk.text,
            embedding_bytes,
            metadata_json,
        ],
    )
    .map_err(|e| AppError::Knowledge(format!("Failed to insert chunk: {}", e)))?;

    Ok(())
}

/// Query the index for the top-k most similar chunks.
///
/// Returns chunks in descending cosine-similarity order.
pub fn query_chunks(
    conn: &Connection,
    query_embedding: &[f32],
    top_k: usize,
) -> AppResult<Vec<(KnowledgeChunk, f32)>> {
    let mut stmt = conn
        .prepare("SELECT id, source, position, text, embedding, metadata FROM chunks")
        .map_err(|e| AppError::Knowledge(format!("Failed to prepare query: {}", e)))?;

    let chunks_iter = stmt
        .query_map([], |row| {
            let embedding_bytes: Vec<u8> = row.get(4)?;
            let embedding = bytes_to_embedding(&embedding_bytes)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

            let metadata_json: Option<String> = row.get(5)?;
            let metadata = metadata_json
                .as_deref()
                .and_then(|json| serde_json::from_str(json).ok())
                .unwrap_or(serde_json::Value::Null);

            Ok(KnowledgeChunk {
                id: row.get(0)?,
                source: row.get(1)?,
                position: row.get::<_, i64>(2)? as u32,
                text: row.get(3)?,
                embedding: Some(embedding),
                metadata,
            })
        })
        .map_err(|e| AppError::Knowledge(format!("Failed to query chunks: {}", e)))?;

    let mut results: Vec<(KnowledgeChunk, f32)> = chunks_iter
        .filter_map(|r| r.ok())
        .map(|chunk| {
            let score = chunk
                .embedding
                .as_ref()
                .map(|e| cosine_similarity(query_embedding, e))
                .unwrap_or(0.0);
            (chunk, score)
        })
        .collect();

    // Sort by score descending
    results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    results.truncate(top_k);

    tracing::debug!(
        "Retrieved {} chunks (requested top-{})",
        results.len(),
        top_k
    );

    Ok(results)
}

/// Count the stored chunks.
pub fn count_chunks(conn: &Connection) -> AppResult<u32> {
    conn.query_row("SELECT COUNT(*) FROM chunks", [], |row| {
        row.get::<_, i64>(0).map(|v| v as u32)
    })
    .map_err(|e| AppError::Knowledge(format!("Failed to count chunks: {}", e)))
}

/// Reset the index, removing all chunks.
pub fn reset_index(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM chunks", [])
        .map_err(|e| AppError::Knowledge(format!("Failed to delete chunks: {}", e)))?;

    tracing::info!("Reset vector index");
    Ok(())
}

/// Convert an embedding vector to bytes for storage.
fn embedding_to_bytes(embedding: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(embedding.len() * 4);
    for &value in embedding {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

/// Convert stored bytes back to an embedding vector.
fn bytes_to_embedding(bytes: &[u8]) -> AppResult<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return Err(AppError::Knowledge(
            "Invalid embedding bytes length".to_string(),
        ));
    }

    let mut embedding = Vec::with_capacity(bytes.len() / 4);
    for chunk in bytes.chunks_exact(4) {
        embedding.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }

    Ok(embedding)
}

/// Cosine similarity between two vectors.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_chunk(id: &str, position: u32, text: &str, embedding: Vec<f32>) -> KnowledgeChunk {
        KnowledgeChunk {
            id: id.to_string(),
            source: "knowledge.txt".to_string(),
            position,
            text: text.to_string(),
            embedding: Some(embedding),
            metadata: serde_json::json!({}),
        }
    }

    #[test]
    fn test_open_index_creates_schema() {
        let temp = TempDir::new().unwrap();
        let conn = open_index(&temp.path().join("index.sqlite")).unwrap();

        let table_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='chunks'",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(table_count, 1);
    }

    #[test]
    fn test_insert_and_query() {
        let temp = TempDir::new().unwrap();
        let conn = open_index(&temp.path().join("index.sqlite")).unwrap();

        insert_chunk(&conn, &test_chunk("c1", 0, "fees", vec![1.0, 0.0, 0.0])).unwrap();
        insert_chunk(&conn, &test_chunk("c2", 1, "hostel", vec![0.0, 1.0, 0.0])).unwrap();

        let results = query_chunks(&conn, &[1.0, 0.0, 0.0], 5).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0.id, "c1");
        assert!(results[0].1 > results[1].1);
    }

    #[test]
    fn test_query_truncates_to_top_k() {
        let temp = TempDir::new().unwrap();
        let conn = open_index(&temp.path().join("index.sqlite")).unwrap();

        for i in 0..10 {
            let chunk = test_chunk(&format!("c{}", i), i, "text", vec![i as f32, 1.0, 0.0]);
            insert_chunk(&conn, &chunk).unwrap();
        }

        let results = query_chunks(&conn, &[1.0, 0.0, 0.0], 3).unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_reset_and_count() {
        let temp = TempDir::new().unwrap();
        let conn = open_index(&temp.path().join("index.sqlite")).unwrap();

        insert_chunk(&conn, &test_chunk("c1", 0, "text", vec![1.0, 0.0])).unwrap();
        assert_eq!(count_chunks(&conn).unwrap(), 1);

        reset_index(&conn).unwrap();
        assert_eq!(count_chunks(&conn).unwrap(), 0);
    }

    #[test]
    fn test_embedding_bytes_roundtrip() {
        let embedding = vec![0.25, -1.5, 3.75];
        let bytes = embedding_to_bytes(&embedding);
        assert_eq!(bytes_to_embedding(&bytes).unwrap(), embedding);

        assert!(bytes_to_embedding(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_cosine_similarity() {
        let a = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &[1.0, 0.0, 0.0]) - 1.0).abs() < 0.001);
        assert!((cosine_similarity(&a, &[0.0, 1.0, 0.0]) - 0.0).abs() < 0.001);
        assert_eq!(cosine_similarity(&a, &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&a, &[0.0, 0.0, 0.0]), 0.0);
    }
}
