//! Context assembly from retrieved chunks.

use crate::types::KnowledgeChunk;

/// Join retrieved chunk texts into a single context string.
///
/// Chunks are joined with blank-line separators in the order given
/// (descending similarity). No deduplication and no length capping; if
/// the assembled context exceeds the model's input limit, that surfaces
/// as a generation-time error.
pub fn assemble_context(chunks: &[KnowledgeChunk]) -> String {
    chunks
        .iter()
        .map(|chunk| chunk.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}
