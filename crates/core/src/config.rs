//! Configuration management for the campus assistant.
//!
//! Configuration is merged from three sources, later ones winning:
//! - Built-in defaults
//! - The optional YAML config file (`.campus/config.yaml`)
//! - Environment variables and command-line flags
//!
//! All persistent state lives under `.campus/` in the workspace.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Environment variable holding the Gemini API key.
///
/// The key is read from the environment only. There is deliberately no
/// in-source fallback; validation fails fast when the active provider
/// needs a key that is absent.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains `.campus/`)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Generation provider ("gemini" or "ollama")
    pub provider: String,

    /// Generation model identifier
    pub model: String,

    /// API key for the generation provider, resolved from the environment
    pub api_key: Option<String>,

    /// Custom provider endpoint (e.g. a non-default Ollama URL)
    pub endpoint: Option<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Retrieval and generation tuning
    #[serde(default)]
    pub rag: RagConfig,
}

/// Retrieval-augmented generation settings.
///
/// These were inline literals in earlier iterations of the assistant;
/// they are named, documented fields here so that every tunable of the
/// retrieve -> prompt -> generate pipeline is visible in one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Number of chunks retrieved per question
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Sampling temperature for answer generation
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum chunk size in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Overlap between consecutive chunks in characters
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

fn default_top_k() -> u32 {
    3
}

fn default_temperature() -> f32 {
    0.3
}

fn default_chunk_size() -> usize {
    1000
}

fn default_chunk_overlap() -> usize {
    200
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            temperature: default_temperature(),
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

/// On-disk configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    provider: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
    rag: Option<RagConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            provider: "gemini".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: None,
            endpoint: None,
            log_level: None,
            verbose: false,
            no_color: false,
            rag: RagConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// Environment variables:
    /// - `CAMPUS_WORKSPACE`: Override workspace path
    /// - `CAMPUS_CONFIG`: Path to config file
    /// - `CAMPUS_PROVIDER`: Generation provider
    /// - `CAMPUS_MODEL`: Model identifier
    /// - `GEMINI_API_KEY`: Gemini API key
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(workspace) = std::env::var("CAMPUS_WORKSPACE") {
            config.workspace = PathBuf::from(workspace);
        }

        if let Ok(config_file) = std::env::var("CAMPUS_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = if let Some(ref cf) = config.config_file {
            cf.clone()
        } else {
            config.state_dir().join("config.yaml")
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override the YAML config
        if let Ok(provider) = std::env::var("CAMPUS_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("CAMPUS_MODEL") {
            config.model = model;
        }

        config.api_key = std::env::var(GEMINI_API_KEY_ENV).ok();
        config.log_level = std::env::var("RUST_LOG").ok();

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(provider) = config_file.provider {
            result.provider = provider;
        }

        if let Some(model) = config_file.model {
            result.model = model;
        }

        if let Some(endpoint) = config_file.endpoint {
            result.endpoint = Some(endpoint);
        }

        if let Some(rag) = config_file.rag {
            result.rag = rag;
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over environment variables and the
    /// config file.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        workspace: Option<PathBuf>,
        config_file: Option<PathBuf>,
        provider: Option<String>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(workspace) = workspace {
            self.workspace = workspace;
        }

        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the `.campus` state directory.
    pub fn state_dir(&self) -> PathBuf {
        self.workspace.join(".campus")
    }

    /// Validate configuration for the active provider.
    ///
    /// Fails fast when the provider is unknown or when `gemini` is
    /// selected without `GEMINI_API_KEY` set in the environment.
    pub fn validate(&self) -> AppResult<()> {
        let known_providers = ["gemini", "ollama"];

        if !known_providers.contains(&self.provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.provider,
                known_providers.join(", ")
            )));
        }

        if self.provider == "gemini" && self.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(AppError::Config(format!(
                "Provider 'gemini' requires an API key in the {} environment variable",
                GEMINI_API_KEY_ENV
            )));
        }

        Ok(())
    }
}
