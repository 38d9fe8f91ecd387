//! Logbook listing.

use elog_core::entities::Logbook;
use elog_core::query::QueryParams;

use crate::error::ClientError;
use crate::transport::{Request, Transport};
use crate::ElogClient;

impl<T: Transport> ElogClient<T> {
    /// List all logbooks.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the transport fails or the body is not a
    /// list of logbooks.
    pub async fn fetch_logbooks(&self) -> Result<Vec<Logbook>, ClientError> {
        let data = self
            .transport
            .fetch("logbooks", Request::get(QueryParams::new()))
            .await?;
        Ok(serde_json::from_value(data)?)
    }
}
