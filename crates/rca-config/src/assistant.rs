//! Chat assistant configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Greeting appended as the first turn of every conversation.
pub const DEFAULT_GREETING: &str = "Hello! I'm your AI assistant for incident analysis and SLO monitoring. You can ask me questions like:\n\n\
\u{2022} \"What incidents happened in the last 24 hours?\"\n\
\u{2022} \"Show me SLO compliance for auth-service\"\n\
\u{2022} \"Why did latency spike at 12:30?\"\n\
\u{2022} \"What's the MTTR trend this week?\"";

/// Longest accepted simulated response delay.
pub const MAX_RESPONSE_DELAY_MS: u64 = 60_000;

/// Default simulated response delay in milliseconds.
const fn default_response_delay_ms() -> u64 {
    1500
}

const fn default_deep_analysis_prompt() -> bool {
    true
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantConfig {
    /// Simulated latency between a submission and the assistant reply.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,

    /// Ask for confirmation and prefill the remediation text when the
    /// deep-analysis sample is chosen.
    #[serde(default = "default_deep_analysis_prompt")]
    pub deep_analysis_prompt: bool,

    /// Seed turn text.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl AssistantConfig {
    #[must_use]
    pub const fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.response_delay_ms > MAX_RESPONSE_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "assistant.response_delay_ms".into(),
                reason: format!(
                    "{} exceeds the maximum of {MAX_RESPONSE_DELAY_MS}",
                    self.response_delay_ms
                ),
            });
        }
        if self.greeting.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "assistant.greeting".into(),
                reason: "must not be blank".into(),
            });
        }
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
            deep_analysis_prompt: default_deep_analysis_prompt(),
            greeting: default_greeting(),
        }
    }
}
