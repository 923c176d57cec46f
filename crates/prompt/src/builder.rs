//! Prompt rendering.

use crate::types::PromptConfig;
use campus_core::{AppError, AppResult};
use handlebars::Handlebars;
use std::collections::HashMap;

/// Render the answer prompt for a question with its retrieved context.
///
/// Both values are substituted verbatim; the context may be empty when
/// retrieval found nothing, in which case the rendered prompt still goes
/// to the model unchanged.
pub fn render_answer_prompt(
    config: &PromptConfig,
    context: &str,
    question: &str,
) -> AppResult<String> {
    tracing::debug!(
        "Rendering answer prompt ({} context chars)",
        context.len()
    );

    let mut variables = HashMap::new();
    variables.insert("context".to_string(), context.to_string());
    variables.insert("question".to_string(), question.to_string());

    render_template(&config.template, &variables)
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &HashMap<String, String>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Disable HTML escaping for plain text
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("answer", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    let rendered = handlebars
        .render("answer", &variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))?;

    Ok(rendered)
}
