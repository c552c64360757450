//! Settings shared by the listing commands.

use serde::{Deserialize, Serialize};

/// Rows `rca incidents` returns when neither `--max` nor `--limit` is given.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Incident rows shown by default. The catalog holds five, so the default
    /// shows everything.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}
