//! Patent lookup use case.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::report::PatentReport;
use crate::domain::PatentId;
use crate::error::Result;

/// User-facing message for [`Lookup::NotFound`].
pub const NOT_FOUND_MESSAGE: &str = "Patent not found or API error.";

/// Outcome of one submitted patent number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Lookup {
    /// Metadata was found; the report carries either a classification or
    /// the reason classification failed.
    Found(Box<PatentReport>),
    /// The search API had no record for the patent, or could not be reached.
    NotFound { patent_number: PatentId },
}

/// Fetch, classify and present one patent.
///
/// Per-submission problems (not found, classification failure) are part of
/// the returned [`Lookup`]. An `Err` means invalid input or a storage
/// failure.
#[async_trait]
pub trait PatentLookup: Send + Sync {
    async fn lookup(&self, raw_id: &str) -> Result<Lookup>;
}
