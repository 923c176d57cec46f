//! Generation provider factory.
//!
//! Creates LLM clients from the application configuration: resolves the
//! provider name, injects the credential, and applies endpoint overrides.

use crate::client::LlmClient;
use crate::providers::{GeminiClient, OllamaClient};
use campus_core::{AppError, AppResult};
use std::sync::Arc;

/// Create an LLM client based on the provider name.
///
/// # Arguments
/// * `provider` - Provider identifier ("gemini" or "ollama")
/// * `endpoint` - Optional custom endpoint URL
/// * `api_key` - API key, required by providers that need one
///
/// # Errors
/// Returns an error if the provider is unknown or a required credential
/// is missing. There is no embedded default credential; the key must be
/// supplied by the caller (ultimately from the environment).
pub fn create_client(
    provider: &str,
    endpoint: Option<&str>,
    api_key: Option<&str>,
) -> AppResult<Arc<dyn LlmClient>> {
    match provider.to_lowercase().as_str() {
        "gemini" | "google" => {
            let api_key = api_key.ok_or_else(|| {
                AppError::Config(
                    "Gemini provider requires an API key (set GEMINI_API_KEY)".to_string(),
                )
            })?;

            let client = match endpoint {
                Some(url) => GeminiClient::with_base_url(api_key, url)?,
                None => GeminiClient::new(api_key)?,
            };
            Ok(Arc::new(client))
        }
        "ollama" => {
            let base_url = endpoint.unwrap_or("http://localhost:11434");
            let client = OllamaClient::with_base_url(base_url);
            Ok(Arc::new(client))
        }
        _ => Err(AppError::Config(format!("Unknown provider: {}", provider))),
    }
}
