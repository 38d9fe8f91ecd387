use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `elog` binary.
#[derive(Debug, Parser)]
#[command(name = "elog", version, about = "Electronic logbook client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the configured service URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use elog_core::enums::SortBy;

    use super::subcommands::{EntryCommands, LogbookCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["elog", "logbooks", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        let flags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Raw);
        assert!(flags.quiet);
        assert!(!flags.verbose);
        assert!(matches!(
            cli.command,
            Commands::Logbooks {
                action: LogbookCommands::List
            }
        ));
    }

    #[test]
    fn list_args_build_a_query() {
        let cli = Cli::try_parse_from([
            "elog",
            "entries",
            "list",
            "--start-date",
            "2024-01-01",
            "--logbook",
            "mcc",
            "--logbook",
            "lcls",
            "--tag",
            "rf",
            "--sort-by",
            "logged-at",
            "--search",
            "klystron",
        ])
        .expect("cli should parse");

        let Commands::Entries {
            action: EntryCommands::List(args),
        } = cli.command
        else {
            panic!("expected entries list");
        };
        let query = args.into_query(25, 0);
        let params = query.to_params();
        assert_eq!(params["startDate"], "2024-01-01T00:00:00.000");
        assert_eq!(params["logbooks"], "mcc,lcls");
        assert_eq!(params["tags"], "rf");
        assert_eq!(params["limit"], "25");
        assert_eq!(params["textFilter"], "klystron");
        assert_eq!(query.sort_by, SortBy::LoggedAt);
        assert!(!params.contains_key("contextSize"));
    }

    #[test]
    fn explicit_limit_beats_default() {
        let cli = Cli::try_parse_from(["elog", "entries", "list", "--limit", "5"])
            .expect("cli should parse");
        let Commands::Entries {
            action: EntryCommands::List(args),
        } = cli.command
        else {
            panic!("expected entries list");
        };
        assert_eq!(args.into_query(25, 2).limit, Some(5));
    }

    #[test]
    fn invalid_start_date_is_rejected() {
        let parsed = Cli::try_parse_from(["elog", "entries", "list", "--start-date", "soon"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn follow_up_takes_parent_and_form() {
        let cli = Cli::try_parse_from([
            "elog",
            "entries",
            "follow-up",
            "e-1",
            "--title",
            "Reset done",
            "--text",
            "<p>ok</p>",
            "--logbook",
            "mcc",
            "--event-at",
            "2024-03-01",
        ])
        .expect("cli should parse");

        let Commands::Entries {
            action: EntryCommands::FollowUp { parent_id, form },
        } = cli.command
        else {
            panic!("expected entries follow-up");
        };
        assert_eq!(parent_id, "e-1");
        let form = form.into_form();
        assert_eq!(form.title, "Reset done");
        assert_eq!(form.event_at.as_deref(), Some("2024-03-01"));
        assert!(form.summarize.is_none());
    }

    #[test]
    fn summarize_needs_both_parts() {
        let parsed = Cli::try_parse_from([
            "elog",
            "entries",
            "create",
            "--title",
            "t",
            "--text",
            "x",
            "--logbook",
            "mcc",
            "--summarize-shift",
            "Day shift",
        ]);
        assert!(parsed.is_err());
    }
}
