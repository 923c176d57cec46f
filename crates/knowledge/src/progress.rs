//! Structured progress reporting for ingestion.
//!
//! Surfaces incremental feedback during the read, chunk, embed, and
//! index phases of an ingest run.

use std::sync::Arc;
use std::time::Instant;

/// Progress event emitted during an ingest run.
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    /// Phase of the operation: "read", "chunk", "embed", "index"
    pub phase: String,

    /// Current progress within the phase
    pub current: u64,

    /// Total expected work (if known)
    pub total: Option<u64>,

    /// Human-readable message
    pub message: String,

    /// Elapsed time since the run started
    pub elapsed_secs: Option<f64>,
}

impl ProgressEvent {
    /// Create a new progress event.
    pub fn new(
        phase: impl Into<String>,
        current: u64,
        total: Option<u64>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            phase: phase.into(),
            current,
            total,
            message: message.into(),
            elapsed_secs: None,
        }
    }

    /// Set elapsed time.
    pub fn with_elapsed(mut self, elapsed_secs: f64) -> Self {
        self.elapsed_secs = Some(elapsed_secs);
        self
    }

    /// Format as a simple user-facing line.
    pub fn format_simple(&self) -> String {
        let progress = if let Some(total) = self.total {
            format!("{}/{}", self.current, total)
        } else {
            format!("{}", self.current)
        };

        format!("[{}] {} - {}", self.phase, progress, self.message)
    }
}

/// Callback for progress events.
pub type ProgressCallback = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

/// Progress reporter that emits events through a callback.
#[derive(Clone)]
pub struct ProgressReporter {
    callback: Option<ProgressCallback>,
    start_time: Arc<Instant>,
}

impl ProgressReporter {
    /// Create a new reporter with a callback.
    pub fn new(callback: ProgressCallback) -> Self {
        Self {
            callback: Some(callback),
            start_time: Arc::new(Instant::now()),
        }
    }

    /// Create a no-op reporter (no events emitted).
    pub fn noop() -> Self {
        Self {
            callback: None,
            start_time: Arc::new(Instant::now()),
        }
    }

    /// Emit a progress event.
    pub fn emit(&self, event: ProgressEvent) {
        if let Some(callback) = &self.callback {
            let elapsed = self.start_time.elapsed().as_secs_f64();
            let event = event.with_elapsed(elapsed);

            tracing::debug!(
                phase = %event.phase,
                current = event.current,
                total = ?event.total,
                message = %event.message,
                elapsed_secs = elapsed,
                "Progress event"
            );

            callback(event);
        }
    }

    /// Emit a read phase event.
    pub fn read(&self, bytes: u64, path: &str) {
        self.emit(ProgressEvent::new(
            "read",
            bytes,
            None,
            format!("loaded {}", path),
        ));
    }

    /// Emit a chunk phase event.
    pub fn chunk(&self, chunks_created: u64) {
        self.emit(ProgressEvent::new(
            "chunk",
            chunks_created,
            None,
            format!("{} chunks created", chunks_created),
        ));
    }

    /// Emit an embed phase event.
    pub fn embed(&self, current: u64, total: u64, model: &str) {
        self.emit(ProgressEvent::new(
            "embed",
            current,
            Some(total),
            format!("model={}", model),
        ));
    }

    /// Emit an index phase event.
    pub fn index(&self, current: u64, total: u64) {
        self.emit(ProgressEvent::new(
            "index",
            current,
            Some(total),
            "writing to index",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_progress_event_format() {
        let event = ProgressEvent::new("embed", 5, Some(10), "model=trigram-v1");
        let formatted = event.format_simple();
        assert!(formatted.contains("[embed]"));
        assert!(formatted.contains("5/10"));
    }

    #[test]
    fn test_progress_reporter_emit() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        let reporter = ProgressReporter::new(Arc::new(move |event| {
            events_clone.lock().unwrap().push(event);
        }));

        reporter.chunk(7);

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].phase, "chunk");
        assert_eq!(captured[0].current, 7);
    }

    #[test]
    fn test_noop_reporter() {
        let reporter = ProgressReporter::noop();
        reporter.read(1, "knowledge.txt"); // Should not panic
    }
}
