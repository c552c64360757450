//! Dashboard configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default latency alert threshold in milliseconds.
const fn default_latency_threshold_ms() -> u32 {
    100
}

fn default_service() -> String {
    "auth-service".to_string()
}

fn default_metric() -> String {
    "service.latency.avg".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Samples strictly above this value raise a spike alert.
    #[serde(default = "default_latency_threshold_ms")]
    pub latency_threshold_ms: u32,

    /// Service the latency series belongs to.
    #[serde(default = "default_service")]
    pub service: String,

    /// Metric name shown with the series.
    #[serde(default = "default_metric")]
    pub metric: String,
}

impl DashboardConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.latency_threshold_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.latency_threshold_ms".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            latency_threshold_ms: default_latency_threshold_ms(),
            service: default_service(),
            metric: default_metric(),
        }
    }
}
