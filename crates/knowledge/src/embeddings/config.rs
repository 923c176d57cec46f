//! Embedding configuration persistence.

use campus_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Embedding configuration for the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingConfig {
    /// Provider name: "trigram" or "ollama"
    pub provider: String,

    /// Model identifier (provider-specific)
    pub model: String,

    /// Embedding vector dimensions
    pub dimensions: usize,

    /// Whether embeddings are normalized to unit length
    #[serde(default = "default_normalize")]
    pub normalize: bool,

    /// Maximum batch size for embedding requests
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_normalize() -> bool {
    true
}

fn default_batch_size() -> usize {
    100
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "trigram".to_string(),
            model: "trigram-v1".to_string(),
            dimensions: 384,
            normalize: true,
            batch_size: 100,
        }
    }
}

impl EmbeddingConfig {
    /// Load the embedding config persisted next to the index.
    ///
    /// Returns the default config when no file exists yet (fresh
    /// workspace before the first ingest).
    pub fn load(workspace: &Path) -> AppResult<Self> {
        let config_path = crate::config::get_embedding_config_path(workspace);

        if !config_path.exists() {
            tracing::debug!("No embedding config found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            AppError::Knowledge(format!(
                "Failed to read embedding config at {:?}: {}",
                config_path, e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Knowledge(format!(
                "Failed to parse embedding config at {:?}: {}",
                config_path, e
            ))
        })
    }

    /// Persist the embedding config next to the index.
    pub fn save(&self, workspace: &Path) -> AppResult<()> {
        let config_path = crate::config::get_embedding_config_path(workspace);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Knowledge(format!("Failed to create state directory: {}", e))
            })?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Knowledge(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, yaml).map_err(|e| {
            AppError::Knowledge(format!(
                "Failed to write embedding config to {:?}: {}",
                config_path, e
            ))
        })?;

        tracing::debug!("Saved embedding config to {:?}", config_path);
        Ok(())
    }

    /// Validate that another config describes the same vector space.
    ///
    /// Similarity search over an index built by a different model is
    /// meaningless, so a mismatch is an error rather than a warning.
    pub fn validate_consistency(&self, other: &Self) -> AppResult<()> {
        if self.provider != other.provider {
            return Err(AppError::Knowledge(format!(
                "Embedding provider mismatch: index was built with '{}', active config is '{}'",
                self.provider, other.provider
            )));
        }

        if self.model != other.model {
            return Err(AppError::Knowledge(format!(
                "Embedding model mismatch: index was built with '{}', active config is '{}'",
                self.model, other.model
            )));
        }

        if self.dimensions != other.dimensions {
            return Err(AppError::Knowledge(format!(
                "Embedding dimension mismatch: index has {}, active config has {}",
                self.dimensions, other.dimensions
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = EmbeddingConfig::default();
        assert_eq!(config.provider, "trigram");
        assert_eq!(config.model, "trigram-v1");
        assert_eq!(config.dimensions, 384);
        assert!(config.normalize);
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let config = EmbeddingConfig {
            provider: "ollama".to_string(),
            model: "nomic-embed-text".to_string(),
            dimensions: 768,
            normalize: true,
            batch_size: 100,
        };

        config.save(temp.path()).unwrap();

        let loaded = EmbeddingConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let loaded = EmbeddingConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, EmbeddingConfig::default());
    }

    #[test]
    fn test_validate_consistency_success() {
        let config = EmbeddingConfig::default();
        assert!(config.validate_consistency(&config.clone()).is_ok());
    }

    #[test]
    fn test_validate_consistency_model_mismatch() {
        let config = EmbeddingConfig::default();
        let other = EmbeddingConfig {
            model: "trigram-v2".to_string(),
            ..config.clone()
        };

        let err = config.validate_consistency(&other).unwrap_err();
        assert!(err.to_string().contains("model mismatch"));
    }

    #[test]
    fn test_validate_consistency_dimension_mismatch() {
        let config = EmbeddingConfig::default();
        let other = EmbeddingConfig {
            dimensions: 768,
            ..config.clone()
        };

        let err = config.validate_consistency(&other).unwrap_err();
        assert!(err.to_string().contains("dimension mismatch"));
    }
}
