//! Ask command handler.
//!
//! One-shot, non-interactive question answering over the index.

use campus_core::{config::AppConfig, AppResult};
use campus_knowledge::rag::answer;
use campus_knowledge::Retriever;
use campus_llm::create_client;
use campus_prompt::load_prompt_config;
use clap::Args;

/// Ask a single question and exit
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");

        config.validate()?;

        let retriever = Retriever::open(&config.workspace).await?;
        let client = create_client(
            &config.provider,
            config.endpoint.as_deref(),
            config.api_key.as_deref(),
        )?;
        let prompt_config = load_prompt_config(&config.workspace)?;

        let result = answer(
            &retriever,
            client.as_ref(),
            &prompt_config,
            &self.question,
            &config.model,
            &config.rag,
        )
        .await?;

        if self.json {
            let output = serde_json::json!({
                "answer": result.answer,
                "model": result.model,
                "provider": config.provider,
                "sources": result.sources,
                "usage": {
                    "promptTokens": result.usage.prompt_tokens,
                    "completionTokens": result.usage.completion_tokens,
                    "totalTokens": result.usage.total_tokens
                }
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", result.answer);
        }

        Ok(())
    }
}
