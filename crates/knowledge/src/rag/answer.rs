//! One-shot RAG answering.
//!
//! Used by the non-interactive `ask` command; the chat loop drives the
//! same retrieve -> assemble -> prompt steps itself so it can stream.

use crate::rag::context::assemble_context;
use crate::retriever::Retriever;
use campus_core::config::RagConfig;
use campus_core::AppResult;
use campus_llm::{LlmClient, LlmRequest, LlmUsage};
use campus_prompt::{render_answer_prompt, PromptConfig};
use serde::{Deserialize, Serialize};

/// Answer to a question, grounded in retrieved chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagAnswer {
    /// Natural language answer from the model
    pub answer: String,

    /// Model that generated the answer
    pub model: String,

    /// Token usage reported by the provider
    pub usage: LlmUsage,

    /// Source files the context chunks came from (deduplicated)
    pub sources: Vec<String>,
}

/// Answer a question using retrieval-augmented generation.
///
/// Retrieves the top-k chunks, assembles the context, renders the answer
/// prompt, and performs a non-streaming completion.
pub async fn answer(
    retriever: &Retriever,
    client: &dyn LlmClient,
    prompt_config: &PromptConfig,
    question: &str,
    model: &str,
    rag: &RagConfig,
) -> AppResult<RagAnswer> {
    let retrieval = retriever.retrieve(question, rag.top_k).await?;
    let context = assemble_context(&retrieval.chunks);

    tracing::debug!(
        "Assembled {} chars of context from {} chunks",
        context.len(),
        retrieval.chunks.len()
    );

    let prompt = render_answer_prompt(prompt_config, &context, question)?;

    let request = LlmRequest::new(prompt, model).with_temperature(rag.temperature);
    let response = client.complete(&request).await?;

    let mut sources: Vec<String> = Vec::new();
    for chunk in &retrieval.chunks {
        if !sources.contains(&chunk.source) {
            sources.push(chunk.source.clone());
        }
    }

    Ok(RagAnswer {
        answer: response.content,
        model: response.model,
        usage: response.usage,
        sources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ingest;
    use crate::progress::ProgressReporter;
    use crate::types::IngestOptions;
    use campus_core::{AppError, AppResult};
    use campus_llm::{LlmResponse, LlmStream, LlmStreamChunk};
    use tempfile::TempDir;

    /// Mock generation client that echoes the prompt or fails.
    struct MockLlm {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl LlmClient for MockLlm {
        fn provider_name(&self) -> &str {
            "mock"
        }

        async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
            if self.fail {
                return Err(AppError::Llm("simulated upstream failure".to_string()));
            }

            Ok(LlmResponse {
                content: format!("echo: {}", request.prompt),
                model: request.model.clone(),
                usage: LlmUsage::new(10, 5),
                done: true,
            })
        }

        async fn stream(&self, request: &LlmRequest) -> AppResult<LlmStream> {
            let response = self.complete(request).await?;
            let chunk = LlmStreamChunk {
                content: response.content,
                model: response.model,
                done: true,
                usage: Some(response.usage),
            };
            Ok(Box::pin(futures::stream::iter(vec![Ok(chunk)])))
        }
    }

    async fn ingest_fixture(workspace: &std::path::Path) {
        let knowledge_file = workspace.join("knowledge.txt");
        std::fs::write(
            &knowledge_file,
            "The B.Tech fee is 2,00,000 per year.\n\n\
             Admissions open in June and close in August.\n\n\
             The campus has three libraries and a sports complex.",
        )
        .unwrap();

        let options = IngestOptions { knowledge_file };
        ingest(
            workspace,
            &options,
            &campus_core::config::RagConfig::default(),
            &ProgressReporter::noop(),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_answer_includes_retrieved_context() {
        let temp = TempDir::new().unwrap();
        ingest_fixture(temp.path()).await;

        let retriever = Retriever::open(temp.path()).await.unwrap();
        let client = MockLlm { fail: false };
        let rag = campus_core::config::RagConfig::default();

        let result = answer(
            &retriever,
            &client,
            &PromptConfig::default(),
            "What is the B.Tech fee?",
            "mock-model",
            &rag,
        )
        .await
        .unwrap();

        // The mock echoes the rendered prompt: the fee fact must have
        // been retrieved into the context
        assert!(result.answer.contains("B.Tech fee"));
        assert!(result.answer.contains("What is the B.Tech fee?"));
        assert_eq!(result.sources, vec!["knowledge.txt".to_string()]);
        assert_eq!(result.usage.total_tokens, 15);
    }

    #[tokio::test]
    async fn test_answer_propagates_generation_failure() {
        let temp = TempDir::new().unwrap();
        ingest_fixture(temp.path()).await;

        let retriever = Retriever::open(temp.path()).await.unwrap();
        let client = MockLlm { fail: true };
        let rag = campus_core::config::RagConfig::default();

        let result = answer(
            &retriever,
            &client,
            &PromptConfig::default(),
            "What is the B.Tech fee?",
            "mock-model",
            &rag,
        )
        .await;

        assert!(result.is_err());
    }
}
