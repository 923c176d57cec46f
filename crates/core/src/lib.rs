//! Campus Assistant Core Library
//!
//! Foundational utilities shared by every crate in the workspace:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Application and retrieval configuration

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, RagConfig};
pub use error::{AppError, AppResult};
