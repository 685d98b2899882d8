//! SQLite patent cache implementation.
//!
//! One row per patent number, holding the raw search response in
//! `data_json` and the classification in `gpt_json`.

use diesel::prelude::*;
use diesel::upsert::excluded;
use tracing::{debug, warn};

use crate::adapter::outbound::sqlite::database::connection::{run_migrations, DbPool};
use crate::adapter::outbound::sqlite::database::model::NewMetadataRow;
use crate::adapter::outbound::sqlite::database::schema::patent_cache;
use crate::domain::PatentId;
use crate::error::{Error, Result};
use crate::port::outbound::cache::PatentCache;

/// SQLite-backed patent cache.
pub struct SqliteCache {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteCache {
    /// Create a new cache over the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(
        &self,
    ) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>>
    {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }
}

impl PatentCache for SqliteCache {
    fn ensure_schema(&self) -> Result<()> {
        run_migrations(&self.pool)
    }

    fn get_metadata(&self, id: &PatentId) -> Result<Option<String>> {
        let mut conn = self.conn()?;

        let data: Option<Option<String>> = patent_cache::table
            .find(id.as_str())
            .select(patent_cache::data_json)
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(data.flatten())
    }

    fn put_metadata(&self, id: &PatentId, json: &str) -> Result<()> {
        let mut conn = self.conn()?;
        let row = NewMetadataRow {
            patent_number: id.as_str(),
            data_json: Some(json),
        };

        diesel::insert_into(patent_cache::table)
            .values(&row)
            .on_conflict(patent_cache::patent_number)
            .do_update()
            .set(patent_cache::data_json.eq(excluded(patent_cache::data_json)))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(patent = %id, bytes = json.len(), "cached patent metadata");
        Ok(())
    }

    fn get_classification(&self, id: &PatentId) -> Result<Option<String>> {
        let mut conn = self.conn()?;

        let gpt: Option<Option<String>> = patent_cache::table
            .find(id.as_str())
            .select(patent_cache::gpt_json)
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(gpt.flatten())
    }

    fn put_classification(&self, id: &PatentId, json: &str) -> Result<bool> {
        let mut conn = self.conn()?;

        let updated = diesel::update(patent_cache::table.find(id.as_str()))
            .set(patent_cache::gpt_json.eq(Some(json)))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        if updated == 0 {
            warn!(patent = %id, "no cached row to attach classification to");
            return Ok(false);
        }
        debug!(patent = %id, "cached classification");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::create_pool;
    use crate::adapter::outbound::sqlite::database::model::CacheRow;

    fn setup() -> (tempfile::TempDir, SqliteCache) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(&dir.path().join("cache.db").to_string_lossy()).unwrap();
        let cache = SqliteCache::new(pool);
        cache.ensure_schema().unwrap();
        (dir, cache)
    }

    fn id(raw: &str) -> PatentId {
        PatentId::parse(raw).unwrap()
    }

    fn rows(cache: &SqliteCache) -> Vec<CacheRow> {
        let mut conn = cache.conn().unwrap();
        patent_cache::table
            .select(CacheRow::as_select())
            .load(&mut conn)
            .unwrap()
    }

    #[test]
    fn empty_cache_misses() {
        let (_dir, cache) = setup();
        assert_eq!(cache.get_metadata(&id("1")).unwrap(), None);
        assert_eq!(cache.get_classification(&id("1")).unwrap(), None);
    }

    #[test]
    fn metadata_round_trips_verbatim() {
        let (_dir, cache) = setup();
        let body = r#"{"patents":[{"patent_number":"1"}],"count":1}"#;

        cache.put_metadata(&id("1"), body).unwrap();

        assert_eq!(cache.get_metadata(&id("1")).unwrap().as_deref(), Some(body));
        assert_eq!(cache.get_classification(&id("1")).unwrap(), None);
    }

    #[test]
    fn put_metadata_replaces_payload_in_single_row() {
        let (_dir, cache) = setup();

        cache.put_metadata(&id("1"), "{\"v\":1}").unwrap();
        cache.put_metadata(&id("1"), "{\"v\":2}").unwrap();

        let rows = rows(&cache);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].data_json.as_deref(), Some("{\"v\":2}"));
    }

    #[test]
    fn put_metadata_keeps_existing_classification() {
        let (_dir, cache) = setup();

        cache.put_metadata(&id("1"), "{}").unwrap();
        assert!(cache.put_classification(&id("1"), "{\"reasoning\":\"r\"}").unwrap());
        cache.put_metadata(&id("1"), "{\"v\":2}").unwrap();

        assert_eq!(
            cache.get_classification(&id("1")).unwrap().as_deref(),
            Some("{\"reasoning\":\"r\"}")
        );
    }

    #[test]
    fn put_classification_without_row_is_noop() {
        let (_dir, cache) = setup();

        assert!(!cache.put_classification(&id("404"), "{}").unwrap());

        assert!(rows(&cache).is_empty());
        assert_eq!(cache.get_classification(&id("404")).unwrap(), None);
    }

    #[test]
    fn keys_are_exact_strings() {
        let (_dir, cache) = setup();

        cache.put_metadata(&id("US11234567"), "{\"a\":1}").unwrap();

        assert_eq!(cache.get_metadata(&id("11234567")).unwrap(), None);
        assert!(cache.get_metadata(&id("US11234567")).unwrap().is_some());
    }

    #[test]
    fn data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let url = dir.path().join("cache.db").to_string_lossy().into_owned();
        {
            let cache = SqliteCache::new(create_pool(&url).unwrap());
            cache.ensure_schema().unwrap();
            cache.put_metadata(&id("7"), "{}").unwrap();
            cache.put_classification(&id("7"), "{\"x\":1}").unwrap();
        }

        let cache = SqliteCache::new(create_pool(&url).unwrap());
        cache.ensure_schema().unwrap();
        assert_eq!(cache.get_metadata(&id("7")).unwrap().as_deref(), Some("{}"));
        assert_eq!(
            cache.get_classification(&id("7")).unwrap().as_deref(),
            Some("{\"x\":1}")
        );
    }
}
