//! # elog-client
//!
//! Entry access layer for the elog REST service.
//!
//! [`ElogClient`] builds requests, hands them to a [`Transport`] and
//! normalizes what comes back:
//! - [`ElogClient::fetch_entries`] lists entry summaries for an [`EntryQuery`]
//! - [`ElogClient::fetch_entry`] fetches one entry with follow-ups, history and
//!   the entry it follows up
//! - [`ElogClient::create_entry`], [`ElogClient::follow_up`] and
//!   [`ElogClient::supersede`] write an [`EntryForm`] and return the new id
//! - [`ElogClient::fetch_logbooks`] lists logbooks
//!
//! [`EntryStore`] caches fetched entries by id on top of a client.
//!
//! [`EntryQuery`]: elog_core::query::EntryQuery
//! [`EntryForm`]: elog_core::entities::EntryForm

mod entries;
mod error;
mod http;
mod logbooks;
mod store;
mod transport;

pub use error::ClientError;
pub use http::HttpTransport;
pub use store::EntryStore;
pub use transport::{Method, Request, Transport};

use elog_config::ElogConfig;
use elog_core::normalize::Normalizer;

/// Typed client for the logbook service.
pub struct ElogClient<T> {
    transport: T,
    normalizer: Normalizer,
}

impl<T: Transport> ElogClient<T> {
    #[must_use]
    pub const fn new(transport: T, normalizer: Normalizer) -> Self {
        Self {
            transport,
            normalizer,
        }
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub const fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}

impl ElogClient<HttpTransport> {
    /// Client talking HTTP to the service described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &ElogConfig) -> Result<Self, ClientError> {
        Ok(Self::new(
            HttpTransport::new(&config.server)?,
            config.shift.normalizer(),
        ))
    }
}
