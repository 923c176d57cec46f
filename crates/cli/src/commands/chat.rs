//! Interactive chat command handler.
//!
//! A terminal read-eval loop over the RAG pipeline. Each question is
//! handled synchronously; the loop blocks until the generation call
//! returns or fails. Errors are rendered inline and the session stays
//! usable for the next question.

use crate::session::ChatSession;
use campus_core::{config::AppConfig, AppResult};
use campus_knowledge::rag::assemble_context;
use campus_knowledge::Retriever;
use campus_llm::{create_client, LlmClient, LlmRequest};
use campus_prompt::{load_prompt_config, render_answer_prompt, PromptConfig};
use clap::Args;
use futures::StreamExt;
use std::io::{BufRead, Write};

/// Start an interactive chat session
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Disable streaming output
    #[arg(long)]
    pub no_stream: bool,
}

impl ChatCommand {
    /// Execute the chat command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Starting chat session");

        config.validate()?;

        // Expensive resources are created once and reused for every
        // question in the session
        let retriever = Retriever::open(&config.workspace).await?;
        let client = create_client(
            &config.provider,
            config.endpoint.as_deref(),
            config.api_key.as_deref(),
        )?;
        let prompt_config = load_prompt_config(&config.workspace)?;

        let mut session = ChatSession::new();

        print_banner(config);

        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("you> ");
            std::io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break, // EOF
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match input {
                "/quit" | "/exit" => break,
                "/clear" => {
                    session.clear();
                    println!("History cleared.");
                }
                "/history" => print_history(&session),
                "/help" => print_help(),
                question => {
                    run_turn(
                        &mut session,
                        &retriever,
                        client.as_ref(),
                        &prompt_config,
                        config,
                        question,
                        !self.no_stream,
                    )
                    .await?;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }
}

/// Handle one question: record it, answer it, record the answer.
///
/// A retrieval or generation failure is rendered inline; the user turn
/// stays recorded and no assistant turn is appended, so the session
/// remains consistent and usable.
pub(crate) async fn run_turn(
    session: &mut ChatSession,
    retriever: &Retriever,
    client: &dyn LlmClient,
    prompt_config: &PromptConfig,
    config: &AppConfig,
    question: &str,
    streaming: bool,
) -> AppResult<()> {
    session.push_user(question);

    eprintln!("(checking the knowledge base...)");

    match generate_answer(retriever, client, prompt_config, config, question, streaming).await {
        Ok(answer) => session.push_assistant(answer),
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}

/// Run the retrieve -> assemble -> prompt -> generate pipeline for one
/// question, printing the answer as it is produced.
async fn generate_answer(
    retriever: &Retriever,
    client: &dyn LlmClient,
    prompt_config: &PromptConfig,
    config: &AppConfig,
    question: &str,
    streaming: bool,
) -> AppResult<String> {
    let retrieval = retriever.retrieve(question, config.rag.top_k).await?;
    let context = assemble_context(&retrieval.chunks);

    tracing::debug!(
        "Assembled {} chars of context from {} chunks",
        context.len(),
        retrieval.chunks.len()
    );

    let prompt = render_answer_prompt(prompt_config, &context, question)?;
    let request =
        LlmRequest::new(prompt, &config.model).with_temperature(config.rag.temperature);

    if streaming {
        let mut stream = client.stream(&request.clone().with_streaming()).await?;
        let mut full_content = String::new();

        while let Some(result) = stream.next().await {
            let chunk = result?;

            if !chunk.content.is_empty() {
                full_content.push_str(&chunk.content);
                print!("{}", chunk.content);
                std::io::stdout().flush().ok();
            }

            if chunk.done {
                break;
            }
        }

        println!();
        Ok(full_content)
    } else {
        let response = client.complete(&request).await?;
        println!("{}", response.content);
        Ok(response.content)
    }
}

/// Informational banner shown at session start.
fn print_banner(config: &AppConfig) {
    println!("Campus Helper");
    println!("A retrieval-augmented assistant for questions about:");
    println!("  - Course details");
    println!("  - Fee structures");
    println!("  - Admission dates");
    println!("  - Placements");
    println!();
    println!(
        "Provider: {} ({}) | Commands: /history /clear /help /quit",
        config.provider, config.model
    );
    println!();
}

/// Render the full turn history in order.
fn print_history(session: &ChatSession) {
    if session.is_empty() {
        println!("(no history)");
        return;
    }

    for turn in session.turns() {
        println!("{}: {}", turn.role.as_str(), turn.text);
    }
}

fn print_help() {
    println!("Type a question to get an answer from the knowledge base.");
    println!("  /history  show all turns of this session");
    println!("  /clear    clear the turn history");
    println!("  /quit     end the session");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use campus_core::{AppError, AppResult};
    use campus_knowledge::progress::ProgressReporter;
    use campus_knowledge::IngestOptions;
    use campus_llm::{LlmResponse, LlmStream, LlmStreamChunk, LlmUsage};
    use tempfile::TempDir;

    /// Mock generation client with a fixed reply or a forced failure.
    struct MockLlm {
        reply: Option<String>,
    }

    #[async_trait::async_trait]
    impl LlmClient for MockLlm {
        fn provider_name(&self) -> &str {
            "mock"
        }

        async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
            match &self.reply {
                Some(reply) => Ok(LlmResponse {
                    content: reply.clone(),
                    model: request.model.clone(),
                    usage: LlmUsage::new(1, 1),
                    done: true,
                }),
                None => Err(AppError::Llm("simulated upstream failure".to_string())),
            }
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

    async fn setup_workspace() -> (TempDir, AppConfig) {
        let temp = TempDir::new().unwrap();
        let knowledge_file = temp.path().join("knowledge.txt");
        std::fs::write(
            &knowledge_file,
            "The B.Tech fee is 2,00,000 per year.\n\nAdmissions open in June.",
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.workspace = temp.path().to_path_buf();
        config.model = "mock-model".to_string();

        campus_knowledge::ingest(
            temp.path(),
            &IngestOptions { knowledge_file },
            &config.rag,
            &ProgressReporter::noop(),
        )
        .await
        .unwrap();

        (temp, config)
    }

    #[tokio::test]
    async fn test_successful_turn_appends_both_messages() {
        let (temp, config) = setup_workspace().await;
        let retriever = Retriever::open(temp.path()).await.unwrap();
        let client = MockLlm {
            reply: Some("The fee is 2,00,000 per year.".to_string()),
        };

        let mut session = ChatSession::new();
        run_turn(
            &mut session,
            &retriever,
            &client,
            &PromptConfig::default(),
            &config,
            "What is the B.Tech fee?",
            false,
        )
        .await
        .unwrap();

        assert_eq!(session.len(), 2);
        assert_eq!(session.turns()[0].role, Role::User);
        assert_eq!(session.turns()[1].role, Role::Assistant);
        assert!(session.turns()[1].text.contains("2,00,000"));
    }

    #[tokio::test]
    async fn test_failed_turn_keeps_user_message_only() {
        let (temp, config) = setup_workspace().await;
        let retriever = Retriever::open(temp.path()).await.unwrap();
        let client = MockLlm { reply: None };

        let mut session = ChatSession::new();
        run_turn(
            &mut session,
            &retriever,
            &client,
            &PromptConfig::default(),
            &config,
            "What is the B.Tech fee?",
            false,
        )
        .await
        .unwrap();

        // The failed turn's user message remains; no assistant message
        assert_eq!(session.len(), 1);
        assert_eq!(session.turns()[0].role, Role::User);
    }

    #[tokio::test]
    async fn test_session_stays_usable_after_failure() {
        let (temp, config) = setup_workspace().await;
        let retriever = Retriever::open(temp.path()).await.unwrap();

        let mut session = ChatSession::new();

        let failing = MockLlm { reply: None };
        run_turn(
            &mut session,
            &retriever,
            &failing,
            &PromptConfig::default(),
            &config,
            "first question",
            false,
        )
        .await
        .unwrap();

        let working = MockLlm {
            reply: Some("an answer".to_string()),
        };
        run_turn(
            &mut session,
            &retriever,
            &working,
            &PromptConfig::default(),
            &config,
            "second question",
            true,
        )
        .await
        .unwrap();

        assert_eq!(session.len(), 3);
        assert_eq!(session.turns()[2].text, "an answer");
    }

    #[tokio::test]
    async fn test_clearing_history_does_not_touch_index() {
        let (temp, config) = setup_workspace().await;
        let retriever = Retriever::open(temp.path()).await.unwrap();
        let client = MockLlm {
            reply: Some("ok".to_string()),
        };

        let mut session = ChatSession::new();
        run_turn(
            &mut session,
            &retriever,
            &client,
            &PromptConfig::default(),
            &config,
            "anything",
            false,
        )
        .await
        .unwrap();

        let before = campus_knowledge::stats(temp.path()).unwrap();

        session.clear();
        assert_eq!(session.len(), 0);

        let after = campus_knowledge::stats(temp.path()).unwrap();
        assert_eq!(before.chunks_count, after.chunks_count);
    }
}
