use clap::Subcommand;

use crate::cli::subcommands::{EntryCommands, LogbookCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Browse and write log entries.
    Entries {
        #[command(subcommand)]
        action: EntryCommands,
    },
    /// Logbooks.
    Logbooks {
        #[command(subcommand)]
        action: LogbookCommands,
    },
}
