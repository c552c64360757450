use rca_config::RcaConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &RcaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Ask(args) => commands::ask::handle(&args, flags),
        Commands::Chat => commands::chat::handle(config, flags).await,
        Commands::Samples => commands::samples::handle(config, flags),
        Commands::Incidents(args) => commands::incidents::handle(&args, config, flags),
        Commands::Dashboard => commands::dashboard::handle(config, flags),
        Commands::Analysis => commands::analysis::handle(flags),
    }
}
