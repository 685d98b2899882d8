//! Lookup service factory (composition root).

use std::sync::Arc;

use tracing::info;

use super::http_client;
use super::llm::build_llm_client;
use super::persistence::build_cache;
use crate::adapter::outbound::patentsview::PatentsView;
use crate::application::{Classifier, LookupService, MetadataFetcher};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::cache::PatentCache;
use crate::port::outbound::llm::Llm;
use crate::port::outbound::search::PatentSearch;

/// Wire the lookup service from configuration.
///
/// The LLM client is built first so a missing API key is reported before
/// the database is touched.
///
/// # Errors
///
/// Returns an error if the API key is missing, an endpoint is invalid, or
/// the cache cannot be opened.
pub fn build_lookup_service(config: &Config) -> Result<Arc<LookupService>> {
    let llm = build_llm_client(config)?;
    let search: Arc<dyn PatentSearch> = Arc::new(
        PatentsView::new(&config.search.base_url)?
            .with_client(http_client(config.search.timeout_secs)?),
    );
    let cache = build_cache(config)?;

    info!(
        search = search.name(),
        database = %config.database,
        "lookup service ready"
    );
    Ok(Arc::new(assemble(search, llm, cache, config)))
}

/// Assemble the service from already-built adapters.
#[must_use]
pub fn assemble(
    search: Arc<dyn PatentSearch>,
    llm: Arc<dyn Llm>,
    cache: Arc<dyn PatentCache>,
    config: &Config,
) -> LookupService {
    LookupService::new(
        MetadataFetcher::new(search, cache.clone()),
        Classifier::new(llm, cache).with_strict_schema(config.classifier.strict_schema),
    )
}
