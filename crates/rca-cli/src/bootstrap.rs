use anyhow::Context;
use rca_config::RcaConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then layered config. Quiet mode skips the summary log line.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RcaConfig> {
    let config = RcaConfig::load_with_dotenv().context("failed to load rca configuration")?;

    if !flags.quiet {
        tracing::debug!(
            delay_ms = config.assistant.response_delay_ms,
            deep_analysis = config.assistant.deep_analysis_prompt,
            threshold_ms = config.dashboard.latency_threshold_ms,
            "configuration loaded"
        );
    }

    Ok(config)
}
