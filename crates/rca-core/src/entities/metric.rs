use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One sample of a latency series. `timestamp` is a wall-clock label (`HH:MM`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MetricPoint {
    pub timestamp: String,
    pub value_ms: u32,
}

/// A point in a series that crossed the alert threshold.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SpikeAlert {
    pub service: String,
    pub metric: String,
    pub timestamp: String,
    pub peak_ms: u32,
    /// Alert threshold, also the baseline the percentage is measured from.
    pub threshold_ms: u32,
    pub percent_above_baseline: u32,
}
