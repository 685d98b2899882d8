//! Patent search port.

use async_trait::async_trait;

use crate::domain::PatentId;
use crate::error::Result;

/// Remote patent search service.
#[async_trait]
pub trait PatentSearch: Send + Sync {
    /// Return the service name for logging.
    fn name(&self) -> &'static str;

    /// Query for one patent number and return the raw response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status. An
    /// empty result set is not an error; it is a body with no records.
    async fn query(&self, id: &PatentId) -> Result<String>;
}
