//! CLI response types returned as JSON by `rca` commands.
//!
//! These structs define the shape of JSON output for `rca ask`, `rca chat`
//! (`/history`), `rca incidents`, `rca samples`, `rca dashboard`, and `rca analysis`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{
    ChatTurn, CodeSnippet, Incident, KnownIssue, LogLine, MetricPoint, ResultItem, ServiceCard,
    SpikeAlert, SpikeEvent, TimelineEvent, WorkflowStep,
};

/// Response from `rca ask`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AskResponse {
    pub query: String,
    /// Name of the keyword rule that matched. `None` means fallback.
    pub matched_rule: Option<String>,
    pub text: String,
    pub attachments: Vec<ResultItem>,
}

/// Transcript snapshot printed by `/history` in `rca chat`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TranscriptResponse {
    pub conversation_id: String,
    pub turns: Vec<ChatTurn>,
    pub pending: bool,
}

/// One entry of `rca samples`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SampleQuery {
    /// 1-based position, as accepted by `/sample <n>`.
    pub index: u32,
    pub query: String,
    /// Selecting this sample asks for confirmation before filling the draft.
    pub needs_confirmation: bool,
}

/// Response from `rca incidents`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IncidentListResponse {
    pub incidents: Vec<Incident>,
    /// Matches before the limit was applied.
    pub total_matches: u32,
    pub open: u32,
}

/// Response from `rca dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardResponse {
    pub services: Vec<ServiceCard>,
    pub metric: String,
    pub series: Vec<MetricPoint>,
    pub alert: Option<SpikeAlert>,
}

/// Response from `rca analysis`: the root-cause walkthrough for one spike.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisResponse {
    pub spike: SpikeEvent,
    /// Agent pipeline stages, in execution order.
    pub workflow: Vec<WorkflowStep>,
    pub timeline: Vec<TimelineEvent>,
    pub root_cause: KnownIssue,
    pub code: CodeSnippet,
    pub logs: Vec<LogLine>,
    /// 0-100.
    #[schemars(range(max = 100))]
    pub confidence: u8,
}
