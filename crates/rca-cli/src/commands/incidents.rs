use rca_assistant::catalog::{IncidentFilter, list_incidents};
use rca_config::RcaConfig;
use rca_core::enums::{IncidentStatus, Severity};

use crate::cli::root_commands::IncidentsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

/// Handle `rca incidents`.
pub fn handle(args: &IncidentsArgs, config: &RcaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = build_filter(args.status.as_deref(), args.severity.as_deref())?;
    let limit = args.resolved_limit(flags.limit, config.general.default_limit);
    let listed = list_incidents(&filter, limit);

    match flags.format {
        OutputFormat::Table => output(&listed.incidents, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&listed, flags.format),
    }
}

impl IncidentsArgs {
    /// `--max` wins over the global `--limit`, which wins over `general.default_limit`.
    fn resolved_limit(&self, global: Option<u32>, configured: u32) -> u32 {
        self.limit.or(global).unwrap_or(configured)
    }
}

fn build_filter(status: Option<&str>, severity: Option<&str>) -> anyhow::Result<IncidentFilter> {
    Ok(IncidentFilter {
        status: status
            .map(|raw| parse_enum::<IncidentStatus>(raw, "status"))
            .transpose()?,
        severity: severity
            .map(|raw| parse_enum::<Severity>(raw, "severity"))
            .transpose()?,
    })
}
