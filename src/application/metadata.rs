//! Cache-first patent metadata lookup.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{PatentId, PatentMetadata, SearchResponse};
use crate::error::Result;
use crate::port::outbound::cache::PatentCache;
use crate::port::outbound::search::PatentSearch;

/// Resolves a patent number to its bibliographic metadata.
///
/// A cached search response is always preferred. On a miss the search API
/// is queried once; a usable response is cached verbatim and anything else
/// (transport error, non-success status, undecodable body, zero records)
/// is reported as not found.
pub struct MetadataFetcher {
    search: Arc<dyn PatentSearch>,
    cache: Arc<dyn PatentCache>,
}

impl MetadataFetcher {
    #[must_use]
    pub fn new(search: Arc<dyn PatentSearch>, cache: Arc<dyn PatentCache>) -> Self {
        Self { search, cache }
    }

    /// Fetch metadata for `id`.
    ///
    /// Returns `Ok(None)` when the patent cannot be found.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache cannot be read or written, or if a
    /// cached payload no longer parses.
    pub async fn fetch(&self, id: &PatentId) -> Result<Option<PatentMetadata>> {
        if let Some(cached) = self.cache.get_metadata(id)? {
            debug!(patent = %id, "metadata cache hit");
            return Ok(SearchResponse::parse(&cached)?.into_first());
        }

        let body = match self.search.query(id).await {
            Ok(body) => body,
            Err(e) => {
                warn!(patent = %id, source = self.search.name(), error = %e, "patent search failed");
                return Ok(None);
            }
        };

        let first = match SearchResponse::parse(&body) {
            Ok(response) => response.into_first(),
            Err(e) => {
                warn!(patent = %id, error = %e, "undecodable patent search response");
                return Ok(None);
            }
        };

        let Some(metadata) = first else {
            warn!(patent = %id, "patent search returned no records");
            return Ok(None);
        };

        self.cache.put_metadata(id, &body)?;
        info!(patent = %id, title = metadata.title_or_empty(), "fetched patent metadata");
        Ok(Some(metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::cache::MemoryCache;
    use crate::testkit::fixture::{empty_body, widget_body, WIDGET_NUMBER, WIDGET_TITLE};
    use crate::testkit::search::{SearchReply, StubSearch};

    fn fetcher(search: StubSearch) -> (Arc<StubSearch>, Arc<MemoryCache>, MetadataFetcher) {
        let search = Arc::new(search);
        let cache = Arc::new(MemoryCache::new());
        let fetcher = MetadataFetcher::new(search.clone(), cache.clone());
        (search, cache, fetcher)
    }

    fn widget() -> PatentId {
        PatentId::parse(WIDGET_NUMBER).unwrap()
    }

    #[tokio::test]
    async fn miss_queries_once_and_caches_raw_body() {
        let (search, cache, fetcher) = fetcher(StubSearch::body(widget_body()));

        let metadata = fetcher.fetch(&widget()).await.unwrap().unwrap();

        assert_eq!(metadata.title.as_deref(), Some(WIDGET_TITLE));
        assert_eq!(search.calls(), 1);
        assert_eq!(search.queried(), vec![WIDGET_NUMBER.to_string()]);
        let row = cache.row(WIDGET_NUMBER).unwrap();
        assert_eq!(row.data_json, Some(widget_body()));
        assert_eq!(row.gpt_json, None);
    }

    #[tokio::test]
    async fn second_fetch_is_served_from_cache() {
        let (search, _cache, fetcher) = fetcher(StubSearch::body(widget_body()));

        let first = fetcher.fetch(&widget()).await.unwrap();
        let second = fetcher.fetch(&widget()).await.unwrap();

        assert_eq!(search.calls(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn empty_result_is_not_found_and_not_cached() {
        let (search, cache, fetcher) = fetcher(StubSearch::body(empty_body()));

        assert_eq!(fetcher.fetch(&widget()).await.unwrap(), None);
        assert_eq!(search.calls(), 1);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn error_status_is_not_found_and_not_cached() {
        let (_search, cache, fetcher) =
            fetcher(StubSearch::new(SearchReply::Status(500, "oops".into())));

        assert_eq!(fetcher.fetch(&widget()).await.unwrap(), None);
        assert_eq!(cache.metadata_writes(), 0);
    }

    #[tokio::test]
    async fn transport_failure_is_not_found() {
        let (_search, cache, fetcher) = fetcher(StubSearch::new(SearchReply::Unreachable));

        assert_eq!(fetcher.fetch(&widget()).await.unwrap(), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn undecodable_body_is_not_found() {
        let (_search, cache, fetcher) = fetcher(StubSearch::body("<html>maintenance</html>"));

        assert_eq!(fetcher.fetch(&widget()).await.unwrap(), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let search = Arc::new(StubSearch::body(widget_body()));
        let fetcher = MetadataFetcher::new(search.clone(), Arc::new(MemoryCache::failing()));

        assert!(fetcher.fetch(&widget()).await.is_err());
        assert_eq!(search.calls(), 0);
    }

    #[tokio::test]
    async fn cached_row_without_metadata_queries_search() {
        let search = Arc::new(StubSearch::body(widget_body()));
        let cache = Arc::new(MemoryCache::new().with_row(WIDGET_NUMBER, None, Some("{}")));
        let fetcher = MetadataFetcher::new(search.clone(), cache.clone());

        assert!(fetcher.fetch(&widget()).await.unwrap().is_some());
        assert_eq!(search.calls(), 1);
        assert_eq!(cache.row(WIDGET_NUMBER).unwrap().gpt_json.as_deref(), Some("{}"));
    }
}
