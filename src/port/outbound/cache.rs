//! Persistence port for cached patent metadata and classifications.

use crate::domain::PatentId;
use crate::error::Result;

/// Key-value cache keyed by patent number with two independent payloads.
///
/// Metadata and classification are written in separate operations:
/// metadata first (creating the row), classification later (updating it).
/// Nothing is ever evicted.
pub trait PatentCache: Send + Sync {
    /// Create the backing table if it does not exist yet.
    fn ensure_schema(&self) -> Result<()>;

    /// Cached raw search response for a patent, if any.
    fn get_metadata(&self, id: &PatentId) -> Result<Option<String>>;

    /// Insert or replace the metadata payload, keeping any classification.
    fn put_metadata(&self, id: &PatentId, json: &str) -> Result<()>;

    /// Cached classification for a patent, if any.
    fn get_classification(&self, id: &PatentId) -> Result<Option<String>>;

    /// Set the classification payload on an existing row.
    ///
    /// Returns `false` when no row exists for the patent.
    fn put_classification(&self, id: &PatentId, json: &str) -> Result<bool>;
}
