use clap::{Args, Subcommand, ValueEnum};
use elog_core::entities::{EntryForm, Summarize};
use elog_core::enums::SortBy;
use elog_core::query::EntryQuery;
use elog_core::timestamp::{UtcTimestamp, parse_instant};

/// Entry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EntryCommands {
    /// List entries.
    List(EntryListArgs),
    /// Show one entry with follow-ups and history.
    Get { id: String },
    /// Create a new entry.
    Create(EntryFormArgs),
    /// Follow up an existing entry.
    FollowUp {
        parent_id: String,
        #[command(flatten)]
        form: EntryFormArgs,
    },
    /// Replace an entry with a new version.
    Supersede {
        target_id: String,
        #[command(flatten)]
        form: EntryFormArgs,
    },
}

/// Logbook commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LogbookCommands {
    /// List logbooks.
    List,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortArg {
    EventAt,
    LoggedAt,
}

impl From<SortArg> for SortBy {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::EventAt => Self::EventAt,
            SortArg::LoggedAt => Self::LoggedAt,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct EntryListArgs {
    /// Only entries at or after this instant (RFC 3339, date-time or date;
    /// no offset means UTC)
    #[arg(long, value_parser = parse_instant_arg)]
    pub start_date: Option<UtcTimestamp>,
    /// Only entries before this instant
    #[arg(long, value_parser = parse_instant_arg)]
    pub end_date: Option<UtcTimestamp>,
    /// Max entries (defaults to `general.default_limit`)
    #[arg(long)]
    pub limit: Option<u32>,
    /// Surrounding entries to include (defaults to `general.default_context_size`)
    #[arg(long)]
    pub context_size: Option<u32>,
    /// Free-text filter
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, value_enum, default_value = "event-at")]
    pub sort_by: SortArg,
    /// Logbook name (repeatable)
    #[arg(long = "logbook")]
    pub logbooks: Vec<String>,
    /// Tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

impl EntryListArgs {
    #[must_use]
    pub fn into_query(self, default_limit: u32, default_context_size: u32) -> EntryQuery {
        EntryQuery {
            start_date: self.start_date,
            end_date: self.end_date,
            limit: Some(self.limit.unwrap_or(default_limit)),
            context_size: Some(self.context_size.unwrap_or(default_context_size)),
            search: self.search,
            sort_by: self.sort_by.into(),
            logbooks: self.logbooks,
            tags: self.tags,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct EntryFormArgs {
    #[arg(long)]
    pub title: String,
    /// Entry body (HTML)
    #[arg(long)]
    pub text: String,
    #[arg(long)]
    pub logbook: String,
    /// Tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Uploaded attachment id (repeatable)
    #[arg(long = "attachment")]
    pub attachments: Vec<String>,
    /// When the event happened, if not now (RFC 3339, date-time or date).
    /// A date or date-time without an offset is read as UTC, not local time
    #[arg(long)]
    pub event_at: Option<String>,
    /// Shift this entry summarizes
    #[arg(long, requires = "summarize_date")]
    pub summarize_shift: Option<String>,
    /// Date of the summarized shift
    #[arg(long, requires = "summarize_shift")]
    pub summarize_date: Option<String>,
}

impl EntryFormArgs {
    #[must_use]
    pub fn into_form(self) -> EntryForm {
        let summarize = match (self.summarize_shift, self.summarize_date) {
            (Some(shift), Some(date)) => Some(Summarize { shift, date }),
            _ => None,
        };
        EntryForm {
            title: self.title,
            text: self.text,
            logbook: self.logbook,
            tags: self.tags,
            attachments: self.attachments,
            event_at: self.event_at,
            summarize,
        }
    }
}

fn parse_instant_arg(value: &str) -> Result<UtcTimestamp, String> {
    parse_instant(value)
        .map(UtcTimestamp::from)
        .map_err(|error| error.to_string())
}
