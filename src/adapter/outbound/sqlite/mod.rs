//! SQLite persistence adapter.
//!
//! Provides the SQLite-backed [`PatentCache`](crate::port::outbound::cache::PatentCache)
//! using Diesel ORM.

pub mod cache;
pub mod database;

pub use cache::SqliteCache;
