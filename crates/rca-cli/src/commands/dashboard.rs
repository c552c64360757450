use rca_assistant::catalog;
use rca_config::RcaConfig;
use rca_core::entities::SpikeAlert;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `rca dashboard`.
pub fn handle(config: &RcaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = catalog::dashboard(&config.dashboard);

    match flags.format {
        OutputFormat::Table => {
            output(&view.services, flags.format)?;
            println!();
            println!("{}", view.metric);
            output(&view.series, flags.format)?;
            if let Some(alert) = &view.alert {
                println!();
                println!("{}", alert_line(alert));
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&view, flags.format),
    }
}

fn alert_line(alert: &SpikeAlert) -> String {
    format!(
        "ALERT {} {} spiked to {}ms at {} ({}% above the {}ms threshold)",
        alert.service,
        alert.metric,
        alert.peak_ms,
        alert.timestamp,
        alert.percent_above_baseline,
        alert.threshold_ms,
    )
}
