use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ServiceHealth;

/// Health card for one service on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ServiceCard {
    pub service: String,
    pub health: ServiceHealth,
    /// Display string, e.g. "99.2%".
    pub uptime: String,
    /// Requests per second.
    pub request_rate: u32,
    /// Percentage of failed requests.
    pub error_rate: f64,
}
