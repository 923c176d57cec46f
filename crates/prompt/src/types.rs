//! Prompt configuration types.

use campus_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// The phrase the model is instructed to reply with when the retrieved
/// context does not contain the answer. This is a soft instruction to
/// the model, not an enforced contract.
pub const FALLBACK_ANSWER: &str = "I'm sorry, I don't have that info.";

/// The built-in answer template.
///
/// Directs the model to answer only from the supplied context and to use
/// the fixed fallback phrase otherwise.
const DEFAULT_TEMPLATE: &str = "\
You are a helpful, friendly assistant for Dayananda Sagar University (DSU).
Use the following context to answer the student's question.
If you don't know the answer, just say \"I'm sorry, I don't have that info.\"

Context:
{{context}}

Question:
{{question}}

Answer:
";

/// Configuration for the answer prompt.
///
/// Extracted into named fields so the template and fallback phrase are
/// visible, documented, and overridable rather than buried inline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptConfig {
    /// Handlebars template with `{{context}}` and `{{question}}` variables
    pub template: String,

    /// Fallback phrase the template instructs the model to use when the
    /// context is insufficient
    #[serde(default = "default_fallback")]
    pub fallback_answer: String,
}

fn default_fallback() -> String {
    FALLBACK_ANSWER.to_string()
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            fallback_answer: FALLBACK_ANSWER.to_string(),
        }
    }
}

impl PromptConfig {
    /// Validate that the template carries both required variables.
    pub fn validate(&self) -> AppResult<()> {
        for variable in ["{{context}}", "{{question}}"] {
            if !self.template.contains(variable) {
                return Err(AppError::Prompt(format!(
                    "Answer template is missing the {} variable",
                    variable
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PromptConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.template.contains(FALLBACK_ANSWER));
        assert_eq!(config.fallback_answer, FALLBACK_ANSWER);
    }

    #[test]
    fn test_validate_missing_variable() {
        let config = PromptConfig {
            template: "Question: {{question}}".to_string(),
            fallback_answer: FALLBACK_ANSWER.to_string(),
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("{{context}}"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = PromptConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: PromptConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
