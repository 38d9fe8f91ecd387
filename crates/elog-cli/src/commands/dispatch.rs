use elog_client::{ElogClient, Transport};
use elog_config::ElogConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch<T: Transport>(
    command: Commands,
    client: &ElogClient<T>,
    config: &ElogConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Entries { action } => commands::entries::handle(action, client, config, flags).await,
        Commands::Logbooks { action } => commands::logbooks::handle(&action, client, flags).await,
    }
}
