//! Recursive text chunking with overlap.
//!
//! Splitting is delegated to the `text-splitter` crate, which prefers
//! larger semantic boundaries (paragraphs, then sentences, then words)
//! before falling back to hard character cuts.

use crate::types::ChunkCandidate;
use campus_core::{AppError, AppResult};
use text_splitter::{ChunkConfig, TextSplitter};

/// Chunk text into overlapping segments.
///
/// Each chunk is at most `chunk_size` characters; consecutive chunks
/// share up to `overlap` characters. A text no longer than `chunk_size`
/// yields exactly one chunk.
pub fn chunk_text(
    text: &str,
    chunk_size: usize,
    overlap: usize,
) -> AppResult<Vec<ChunkCandidate>> {
    if text.trim().is_empty() {
        return Ok(vec![]);
    }

    let config = ChunkConfig::new(chunk_size)
        .with_overlap(overlap)
        .map_err(|e| AppError::Knowledge(format!("Invalid chunk configuration: {}", e)))?;

    let splitter = TextSplitter::new(config);

    let chunks: Vec<ChunkCandidate> = splitter
        .chunk_indices(text)
        .filter(|(_, chunk_text)| !chunk_text.trim().is_empty())
        .enumerate()
        .map(|(position, (offset, chunk_text))| ChunkCandidate {
            position: position as u32,
            text: chunk_text.trim().to_string(),
            byte_range: (offset, offset + chunk_text.len()),
        })
        .collect();

    tracing::debug!(
        "Chunked {} bytes into {} chunks (size: {}, overlap: {})",
        text.len(),
        chunks.len(),
        chunk_size,
        overlap
    );

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_chunk() {
        let text = "The admissions office is open Monday through Friday.";
        let chunks = chunk_text(text, 1000, 200).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].position, 0);
        assert_eq!(chunks[0].text, text);
    }

    #[test]
    fn test_long_text_respects_max_size() {
        let text = "The library stays open until midnight during exams. ".repeat(100);
        let chunks = chunk_text(&text, 1000, 200).unwrap();

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.text.chars().count() <= 1000);
        }
    }

    #[test]
    fn test_consecutive_chunks_overlap() {
        let text = "One sentence about campus life. ".repeat(200);
        let chunks = chunk_text(&text, 500, 100).unwrap();

        assert!(chunks.len() > 1);
        // Overlapping chunks start before the previous one ends
        for pair in chunks.windows(2) {
            assert!(pair[1].byte_range.0 < pair[0].byte_range.1);
        }
    }

    #[test]
    fn test_hard_cuts_without_boundaries() {
        // With no whitespace to split on, chunking degrades to hard
        // character cuts: 1000-char chunks advancing by 800
        let text = "a".repeat(2600);
        let chunks = chunk_text(&text, 1000, 200).unwrap();

        assert_eq!(chunks.len(), 3);
        for chunk in &chunks {
            assert!(chunk.text.len() <= 1000);
        }
    }

    #[test]
    fn test_positions_are_sequential() {
        let text = "Paragraph one.\n\nParagraph two.\n\nParagraph three. ".repeat(50);
        let chunks = chunk_text(&text, 300, 50).unwrap();

        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.position, i as u32);
        }
    }

    #[test]
    fn test_empty_text() {
        assert!(chunk_text("", 1000, 200).unwrap().is_empty());
        assert!(chunk_text("   \n\n  ", 1000, 200).unwrap().is_empty());
    }

    #[test]
    fn test_overlap_larger_than_chunk_size_rejected() {
        let result = chunk_text("some text", 100, 200);
        assert!(result.is_err());
    }

    #[test]
    fn test_utf8_text() {
        let text = "The B.Tech fee is ₹2,00,000 per year. Acentuação: ã, õ, ç. ".repeat(40);
        let chunks = chunk_text(&text, 400, 80).unwrap();

        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert!(std::str::from_utf8(chunk.text.as_bytes()).is_ok());
        }
    }
}
