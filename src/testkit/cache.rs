//! In-memory [`PatentCache`] for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;

use crate::domain::PatentId;
use crate::error::{Error, Result};
use crate::port::outbound::cache::PatentCache;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub data_json: Option<String>,
    pub gpt_json: Option<String>,
}

/// A [`PatentCache`] backed by a `HashMap`, with the same row semantics as
/// the SQLite table.
#[derive(Debug, Default)]
pub struct MemoryCache {
    rows: Mutex<HashMap<String, Row>>,
    metadata_writes: AtomicU32,
    classification_writes: AtomicU32,
    fail_reads: bool,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache whose every read fails with a database error.
    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Seed a row directly, bypassing the write counters.
    pub fn with_row(self, id: &str, data_json: Option<&str>, gpt_json: Option<&str>) -> Self {
        self.rows.lock().insert(
            id.to_string(),
            Row {
                data_json: data_json.map(str::to_string),
                gpt_json: gpt_json.map(str::to_string),
            },
        );
        self
    }

    pub fn row(&self, id: &str) -> Option<Row> {
        self.rows.lock().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn metadata_writes(&self) -> u32 {
        self.metadata_writes.load(Ordering::SeqCst)
    }

    pub fn classification_writes(&self) -> u32 {
        self.classification_writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        if self.fail_reads {
            return Err(Error::Database("disk I/O error".into()));
        }
        Ok(())
    }
}

impl PatentCache for MemoryCache {
    fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    fn get_metadata(&self, id: &PatentId) -> Result<Option<String>> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .get(id.as_str())
            .and_then(|row| row.data_json.clone()))
    }

    fn put_metadata(&self, id: &PatentId, json: &str) -> Result<()> {
        self.metadata_writes.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .entry(id.as_str().to_string())
            .or_default()
            .data_json = Some(json.to_string());
        Ok(())
    }

    fn get_classification(&self, id: &PatentId) -> Result<Option<String>> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .get(id.as_str())
            .and_then(|row| row.gpt_json.clone()))
    }

    fn put_classification(&self, id: &PatentId, json: &str) -> Result<bool> {
        self.classification_writes.fetch_add(1, Ordering::SeqCst);
        match self.rows.lock().get_mut(id.as_str()) {
            Some(row) => {
                row.gpt_json = Some(json.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
