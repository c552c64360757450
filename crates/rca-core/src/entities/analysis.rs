use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{LogLevel, StepStatus, TimelineKind};

/// The anomaly an analysis starts from.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SpikeEvent {
    pub metric: String,
    pub service: String,
    pub at: DateTime<Utc>,
    pub value_ms: u32,
}

/// A log line pulled from the spike's time window.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LogLine {
    pub at: DateTime<Utc>,
    pub level: LogLevel,
    pub text: String,
}

impl LogLine {
    /// Level is inferred from the text, see [`LogLevel::of_line`].
    pub fn new(at: DateTime<Utc>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            at,
            level: LogLevel::of_line(&text),
            text,
        }
    }
}

/// A tracked issue the analysis matched against.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KnownIssue {
    pub id: String,
    pub title: String,
    pub resolution: String,
}

/// Source location implicated by the root cause.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CodeSnippet {
    pub file: String,
    pub function: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkflowStep {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimelineEvent {
    pub id: String,
    /// Wall-clock label (`HH:MM:SS`).
    pub timestamp: String,
    pub kind: TimelineKind,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
}
