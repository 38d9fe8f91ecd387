//! Entity structs for the logbook domain.
//!
//! `Raw*` types mirror what the service sends: timestamps without a zone
//! designator and no shift label. They only derive `Deserialize` and are
//! turned into the normalized types by [`crate::normalize::Normalizer`].
//! Normalized types derive `Serialize`, `Deserialize` and `JsonSchema`.

mod attachment;
mod entry;
mod form;
mod logbook;

pub use attachment::Attachment;
pub use entry::{Entry, EntrySummary, RawEntry, RawEntrySummary, RawRecord, Record};
pub use form::{EntryForm, Summarize};
pub use logbook::Logbook;
