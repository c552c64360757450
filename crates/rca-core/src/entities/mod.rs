//! Entity structs for the RCA assistant.
//!
//! Transcript entities (`ChatTurn`, `ResultItem`) are produced at runtime by
//! the conversation store. Catalog entities (`Incident`, `ServiceCard`,
//! `MetricPoint`, `SpikeAlert`) describe the static dashboard data, and the
//! analysis entities (`SpikeEvent`, `LogLine`, `KnownIssue`, `CodeSnippet`,
//! `WorkflowStep`, `TimelineEvent`) the canned root-cause walkthrough. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod analysis;
mod incident;
mod metric;
mod service;
mod turn;

pub use analysis::{CodeSnippet, KnownIssue, LogLine, SpikeEvent, TimelineEvent, WorkflowStep};
pub use incident::Incident;
pub use metric::{MetricPoint, SpikeAlert};
pub use service::ServiceCard;
pub use turn::{ChatTurn, ResultItem};
