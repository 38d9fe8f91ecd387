use anyhow::Context;
use elog_client::{ElogClient, Transport};
use elog_config::ElogConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EntryCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CreatedResponse {
    id: String,
}

/// Handle `elog entries`.
pub async fn handle<T: Transport>(
    action: EntryCommands,
    client: &ElogClient<T>,
    config: &ElogConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EntryCommands::List(args) => {
            let query = args.into_query(
                config.general.default_limit,
                config.general.default_context_size,
            );
            let entries = client
                .fetch_entries(&query)
                .await
                .context("failed to list entries")?;
            output(&entries, flags.format)
        }
        EntryCommands::Get { id } => {
            let entry = client
                .fetch_entry(&id)
                .await
                .with_context(|| format!("failed to fetch entry '{id}'"))?;
            output(&entry, flags.format)
        }
        EntryCommands::Create(form) => {
            let id = client
                .create_entry(form.into_form())
                .await
                .context("failed to create entry")?;
            output(&CreatedResponse { id }, flags.format)
        }
        EntryCommands::FollowUp { parent_id, form } => {
            let id = client
                .follow_up(&parent_id, form.into_form())
                .await
                .with_context(|| format!("failed to follow up entry '{parent_id}'"))?;
            output(&CreatedResponse { id }, flags.format)
        }
        EntryCommands::Supersede { target_id, form } => {
            let id = client
                .supersede(&target_id, form.into_form())
                .await
                .with_context(|| format!("failed to supersede entry '{target_id}'"))?;
            output(&CreatedResponse { id }, flags.format)
        }
    }
}
