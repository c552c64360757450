use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{IncidentStatus, Severity};

/// An entry in the static incident catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    /// Display string, e.g. "23 minutes ago".
    pub occurred_at: String,
    pub ai_insight: String,
    pub service: String,
}
