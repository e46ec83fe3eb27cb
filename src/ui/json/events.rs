//! Shared JSON event types for consistent CLI output.
//!
//! Every command emits `start`, zero or more `skipped`/`warning` events, and
//! exactly one `complete`.

use serde::Serialize;

use splinter::SkippedBlock;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub input: String,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, input: impl Into<String>) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            input: input.into(),
        }
    }
}

/// A block the extractor left in the markup.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub block: &'a SkippedBlock,
}

impl<'a> SkippedEvent<'a> {
    pub fn new(command: &'a str, block: &'a SkippedBlock) -> Self {
        Self {
            event: "skipped",
            command,
            block,
        }
    }
}

/// Non-fatal problem outside the extractor (config keys, ...).
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command,
            message: message.into(),
        }
    }
}

/// Event emitted when a command finishes, carrying its result.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> CompleteEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "complete",
            command,
            duration_ms: None,
            data,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}
