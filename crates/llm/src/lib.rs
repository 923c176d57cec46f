//! LLM integration crate for the campus assistant.
//!
//! Provides a provider-agnostic abstraction for text generation through a
//! unified trait-based interface.
//!
//! # Providers
//! - **Gemini**: Google's hosted generation API (default)
//! - **Ollama**: local LLM runtime
//!
//! # Example
//! ```no_run
//! use campus_llm::{LlmClient, LlmRequest, providers::OllamaClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClient::new();
//! let request = LlmRequest::new("Hello, world!", "llama3.2");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmStream, LlmStreamChunk, LlmUsage};
pub use factory::create_client;
pub use providers::{GeminiClient, OllamaClient};
pub use types::ProviderType;
