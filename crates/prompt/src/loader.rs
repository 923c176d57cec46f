//! Prompt configuration loader.

use crate::types::PromptConfig;
use campus_core::{AppError, AppResult};
use std::path::Path;

/// Load the answer prompt configuration for a workspace.
///
/// Reads `.campus/prompt.yaml` when present; otherwise returns the
/// built-in template. The loaded template is validated before use.
pub fn load_prompt_config(workspace: &Path) -> AppResult<PromptConfig> {
    let prompt_file = workspace.join(".campus/prompt.yaml");

    let config = if prompt_file.exists() {
        tracing::debug!("Loading prompt config from: {:?}", prompt_file);

        let contents = std::fs::read_to_string(&prompt_file).map_err(|e| {
            AppError::Prompt(format!(
                "Failed to read prompt file {:?}: {}",
                prompt_file, e
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Prompt(format!(
                "Failed to parse prompt YAML {:?}: {}",
                prompt_file, e
            ))
        })?
    } else {
        PromptConfig::default()
    };

    config.validate()?;
    Ok(config)
}
