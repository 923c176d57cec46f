//! Error types for the campus assistant.
//!
//! A single unified error enum covers all error categories in the
//! application: configuration, I/O, LLM, knowledge/retrieval, prompt,
//! and chat-session errors.

use thiserror::Error;

/// Unified error type for the campus assistant.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
/// Errors are propagated, never panicked on.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generation-provider errors
    #[error("LLM error: {0}")]
    Llm(String),

    /// Knowledge base, embedding, and retrieval errors
    #[error("Knowledge error: {0}")]
    Knowledge(String),

    /// Prompt template errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Interactive chat session errors
    #[error("Chat error: {0}")]
    Chat(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
