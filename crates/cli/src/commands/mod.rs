//! Command handlers for the campus CLI.

pub mod ask;
pub mod chat;
pub mod ingest;
pub mod stats;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use ingest::IngestCommand;
pub use stats::StatsCommand;
