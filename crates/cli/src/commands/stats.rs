//! Stats command handler.

use campus_core::{config::AppConfig, AppResult};
use clap::Args;

/// Show index statistics
#[derive(Args, Debug)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing stats command");

        let stats = campus_knowledge::stats(&config.workspace)?;

        if self.json {
            let output = serde_json::json!({
                "chunksCount": stats.chunks_count,
                "dbSizeBytes": stats.db_size_bytes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("Knowledge index");
            println!("  Chunks: {}", stats.chunks_count);
            println!("  Size on disk: {} bytes", stats.db_size_bytes);
        }

        Ok(())
    }
}
