//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and connection
//! configuration for the SQLite cache database.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Wait up to five seconds for a competing writer before failing.
const BUSY_TIMEOUT_PRAGMA: &str = "PRAGMA busy_timeout=5000";

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Applies per-connection pragmas as the pool opens connections.
#[derive(Debug, Clone, Copy)]
struct Pragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for Pragmas {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        diesel::sql_query(BUSY_TIMEOUT_PRAGMA)
            .execute(conn)
            .map(|_| ())
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the given database URL.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(5)
        .connection_customizer(Box::new(Pragmas))
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Database(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(diesel::QueryableByName)]
    struct TableCount {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        count: i64,
    }

    #[derive(diesel::QueryableByName)]
    struct BusyTimeout {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        timeout: i64,
    }

    fn temp_pool() -> (tempfile::TempDir, DbPool) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.db");
        let pool = create_pool(&path.to_string_lossy()).unwrap();
        (dir, pool)
    }

    fn patent_cache_tables(pool: &DbPool) -> i64 {
        let mut conn = pool.get().unwrap();
        diesel::sql_query(
            "SELECT COUNT(*) as count FROM sqlite_master WHERE type='table' AND name='patent_cache'",
        )
        .load::<TableCount>(&mut conn)
        .unwrap()
        .first()
        .unwrap()
        .count
    }

    #[test]
    fn create_pool_can_get_connection() {
        let (_dir, pool) = temp_pool();
        assert!(pool.get().is_ok());
    }

    #[test]
    fn run_migrations_creates_patent_cache() {
        let (_dir, pool) = temp_pool();
        run_migrations(&pool).unwrap();
        assert_eq!(patent_cache_tables(&pool), 1);
    }

    #[test]
    fn run_migrations_is_idempotent() {
        let (_dir, pool) = temp_pool();

        run_migrations(&pool).unwrap();
        run_migrations(&pool).unwrap();
        run_migrations(&pool).unwrap();

        assert_eq!(patent_cache_tables(&pool), 1);
    }

    #[test]
    fn run_migrations_adopts_existing_untracked_table() {
        let (_dir, pool) = temp_pool();
        {
            let mut conn = pool.get().unwrap();
            diesel::sql_query(
                "CREATE TABLE patent_cache (patent_number TEXT PRIMARY KEY, data_json TEXT, gpt_json TEXT)",
            )
            .execute(&mut conn)
            .unwrap();
            diesel::sql_query(
                "INSERT INTO patent_cache (patent_number, data_json) VALUES ('1', '{}')",
            )
            .execute(&mut conn)
            .unwrap();
        }

        run_migrations(&pool).unwrap();

        let mut conn = pool.get().unwrap();
        let rows = diesel::sql_query("SELECT COUNT(*) as count FROM patent_cache")
            .load::<TableCount>(&mut conn)
            .unwrap();
        assert_eq!(rows[0].count, 1);
    }

    #[test]
    fn pooled_connections_have_busy_timeout() {
        let (_dir, pool) = temp_pool();
        let mut conn = pool.get().unwrap();

        let rows = diesel::sql_query("PRAGMA busy_timeout")
            .load::<BusyTimeout>(&mut conn)
            .unwrap();
        assert_eq!(rows[0].timeout, 5000);
    }

    #[test]
    fn migrations_constant_is_accessible() {
        let _migrations = MIGRATIONS;
    }
}
