//! Embedding provider trait and factory.

use crate::embeddings::config::EmbeddingConfig;
use campus_core::{AppError, AppResult};
use std::sync::Arc;

/// Trait for embedding providers.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync + std::fmt::Debug {
    /// Get provider name (e.g., "trigram", "ollama")
    fn provider_name(&self) -> &str;

    /// Get model identifier
    fn model_name(&self) -> &str;

    /// Get embedding dimensions
    fn dimensions(&self) -> usize;

    /// Generate embeddings for multiple texts in a batch.
    async fn embed_batch(&self, texts: &[String]) -> AppResult<Vec<Vec<f32>>>;

    /// Generate embedding for a single text (convenience method).
    async fn embed(&self, text: &str) -> AppResult<Vec<f32>> {
        let mut results = self.embed_batch(&[text.to_string()]).await?;
        results
            .pop()
            .ok_or_else(|| AppError::Knowledge("No embedding returned".to_string()))
    }
}

/// Create an embedding provider from configuration.
///
/// The same configuration (and thus the same vector space) is used at
/// ingest and query time; callers load it via [`EmbeddingConfig::load`].
pub async fn create_provider(config: &EmbeddingConfig) -> AppResult<Arc<dyn EmbeddingProvider>> {
    let provider: Arc<dyn EmbeddingProvider> = match config.provider.as_str() {
        "trigram" => Arc::new(super::providers::trigram::TrigramProvider::new(
            config.dimensions,
        )),

        "ollama" => Arc::new(super::providers::ollama::OllamaEmbedder::new(config.clone()).await?),

        _ => {
            return Err(AppError::Knowledge(format!(
                "Unknown embedding provider: '{}'. Supported providers: trigram, ollama",
                config.provider
            )))
        }
    };

    if provider.dimensions() != config.dimensions {
        return Err(AppError::Knowledge(format!(
            "Provider '{}' produces {} dimensions, config expects {}",
            provider.provider_name(),
            provider.dimensions(),
            config.dimensions
        )));
    }

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_trigram_provider() {
        let config = EmbeddingConfig::default();
        let provider = create_provider(&config).await.unwrap();

        assert_eq!(provider.provider_name(), "trigram");
        assert_eq!(provider.model_name(), "trigram-v1");
        assert_eq!(provider.dimensions(), 384);
    }

    #[tokio::test]
    async fn test_create_unknown_provider() {
        let config = EmbeddingConfig {
            provider: "unknown".to_string(),
            ..Default::default()
        };

        let result = create_provider(&config).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unknown embedding provider"));
    }

    #[tokio::test]
    async fn test_provider_embed_single() {
        let config = EmbeddingConfig::default();
        let provider = create_provider(&config).await.unwrap();

        let embedding = provider.embed("test text").await.unwrap();
        assert_eq!(embedding.len(), 384);
    }
}
