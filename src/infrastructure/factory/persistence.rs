//! Persistence factory for the patent cache.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::create_pool;
use crate::adapter::outbound::sqlite::SqliteCache;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::cache::PatentCache;

/// Open the SQLite cache and make sure its table exists.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated.
pub fn build_cache(config: &Config) -> Result<Arc<dyn PatentCache>> {
    let pool = create_pool(&config.database)?;
    let cache = SqliteCache::new(pool);
    cache.ensure_schema()?;
    debug!(database = %config.database, "patent cache ready");
    Ok(Arc::new(cache))
}
