//! Counting [`PatentSearch`] stub for tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::PatentId;
use crate::error::{Error, Result};
use crate::port::outbound::search::PatentSearch;

/// What the stub answers with on every call.
#[derive(Debug, Clone)]
pub enum SearchReply {
    /// HTTP 200 with this body.
    Body(String),
    /// Non-success status with this body.
    Status(u16, String),
    /// Transport failure.
    Unreachable,
}

/// A [`PatentSearch`] that returns one canned reply and counts calls.
pub struct StubSearch {
    reply: SearchReply,
    calls: Arc<AtomicU32>,
    queried: Mutex<Vec<String>>,
}

impl StubSearch {
    pub fn new(reply: SearchReply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicU32::new(0)),
            queried: Mutex::new(Vec::new()),
        }
    }

    /// Answer every query with this body.
    pub fn body(body: impl Into<String>) -> Self {
        Self::new(SearchReply::Body(body.into()))
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Shared counter, for when the stub itself is moved behind an `Arc<dyn _>`.
    pub fn counter(&self) -> Arc<AtomicU32> {
        self.calls.clone()
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().clone()
    }
}

#[async_trait]
impl PatentSearch for StubSearch {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn query(&self, id: &PatentId) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queried.lock().push(id.as_str().to_string());
        match &self.reply {
            SearchReply::Body(body) => Ok(body.clone()),
            SearchReply::Status(status, body) => Err(Error::Api {
                status: *status,
                body: body.clone(),
            }),
            SearchReply::Unreachable => Err(Error::Connection("connection refused".into())),
        }
    }
}
