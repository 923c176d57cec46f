//! Prompt system for the campus assistant.
//!
//! The answer prompt is a fixed instruction template with two variables,
//! `{{context}}` and `{{question}}`, held in an explicit [`PromptConfig`]
//! structure instead of an inline string literal. A workspace can
//! override the template via `.campus/prompt.yaml`.

pub mod builder;
pub mod loader;
pub mod types;

pub use builder::render_answer_prompt;
pub use loader::load_prompt_config;
pub use types::PromptConfig;
