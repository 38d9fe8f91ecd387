use anyhow::Context;
use elog_client::{ElogClient, Transport};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LogbookCommands;
use crate::output::output;

/// Handle `elog logbooks`.
pub async fn handle<T: Transport>(
    action: &LogbookCommands,
    client: &ElogClient<T>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LogbookCommands::List => {
            let logbooks = client
                .fetch_logbooks()
                .await
                .context("failed to list logbooks")?;
            output(&logbooks, flags.format)
        }
    }
}
