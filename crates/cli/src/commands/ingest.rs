//! Ingest command handler.
//!
//! Runs the knowledge ingestion batch job: read, chunk, embed, index.

use campus_core::{config::AppConfig, AppResult};
use campus_knowledge::progress::ProgressReporter;
use campus_knowledge::IngestOptions;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Ingest the knowledge file into the vector index
#[derive(Args, Debug)]
pub struct IngestCommand {
    /// Path to the knowledge file (relative to the workspace)
    #[arg(short, long, default_value = "knowledge.txt")]
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl IngestCommand {
    /// Execute the ingest command.
    ///
    /// A failure to read the knowledge file is reported and aborts the
    /// batch job cleanly without touching a previously built index; it
    /// does not crash the process.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ingest command");

        let knowledge_file = if self.file.is_absolute() {
            self.file.clone()
        } else {
            config.workspace.join(&self.file)
        };

        println!("Loading knowledge base...");

        let progress = if self.json {
            ProgressReporter::noop()
        } else {
            ProgressReporter::new(Arc::new(|event| {
                // Per-chunk index events are too chatty for the console;
                // report that phase only on completion
                let done = event.total.map(|t| event.current == t).unwrap_or(true);
                if event.phase != "index" || done {
                    println!("{}", event.format_simple());
                }
            }))
        };

        let options = IngestOptions { knowledge_file };

        let stats =
            match campus_knowledge::ingest(&config.workspace, &options, &config.rag, &progress)
                .await
            {
                Ok(stats) => stats,
                Err(e) => {
                    println!("Error: {}", e);
                    return Ok(());
                }
            };

        if self.json {
            let output = serde_json::json!({
                "chunksCount": stats.chunks_count,
                "bytesProcessed": stats.bytes_processed,
                "durationSecs": stats.duration_secs,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("--------------------------------------------------");
            println!(
                "Successfully stored {} chunks in the index ({} bytes in {:.2}s).",
                stats.chunks_count, stats.bytes_processed, stats.duration_secs
            );
            println!("The knowledge base is ready. You can now run 'campus chat'.");
            println!("--------------------------------------------------");
        }

        Ok(())
    }
}
