//! Single-submission patent lookup.

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::classifier::Classifier;
use super::metadata::MetadataFetcher;
use super::presenter::present;
use crate::domain::PatentId;
use crate::error::{Error, Result};
use crate::port::inbound::lookup::{Lookup, PatentLookup};

/// Composes metadata fetch, classification and presentation.
///
/// A patent that cannot be found and a classification that fails are both
/// per-submission outcomes; only storage errors propagate.
pub struct LookupService {
    fetcher: MetadataFetcher,
    classifier: Classifier,
}

impl LookupService {
    #[must_use]
    pub fn new(fetcher: MetadataFetcher, classifier: Classifier) -> Self {
        Self {
            fetcher,
            classifier,
        }
    }
}

#[async_trait]
impl PatentLookup for LookupService {
    #[instrument(skip_all, fields(patent = raw_id.trim()))]
    async fn lookup(&self, raw_id: &str) -> Result<Lookup> {
        let id = PatentId::parse(raw_id)?;

        let Some(metadata) = self.fetcher.fetch(&id).await? else {
            warn!("patent not found");
            return Ok(Lookup::NotFound { patent_number: id });
        };

        let classification = match self.classifier.classify(&metadata).await {
            Ok(result) => Ok(result),
            Err(Error::Classification(failure)) => {
                warn!(reason = %failure, "classification failed");
                Err(failure)
            }
            Err(e) => return Err(e),
        };

        let report = present(&metadata, classification);
        info!(
            classified = report.classification.is_ready(),
            "lookup complete"
        );
        Ok(Lookup::Found(Box::new(report)))
    }
}
