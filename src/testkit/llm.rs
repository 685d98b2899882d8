//! Scripted [`Llm`] for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

/// A mock LLM that pops replies from a queue and records every prompt.
///
/// `Err(msg)` entries become [`Error::Connection`]. An exhausted queue
/// repeats the last reply.
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<std::result::Result<String, String>>>,
    last: Mutex<Option<std::result::Result<String, String>>>,
    calls: Arc<AtomicU32>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedLlm {
    pub fn new(replies: Vec<std::result::Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            last: Mutex::new(None),
            calls: Arc::new(AtomicU32::new(0)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always reply with this text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(vec![Ok(text.into())])
    }

    /// Always fail with this transport error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(vec![Err(message.into())])
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Shared counter, for when the mock itself is moved behind an `Arc<dyn _>`.
    pub fn counter(&self) -> Arc<AtomicU32> {
        self.calls.clone()
    }

    /// `(system, prompt)` pairs in call order.
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .push((system.to_string(), prompt.to_string()));

        let next = self.replies.lock().pop_front();
        let reply = match next {
            Some(reply) => {
                *self.last.lock() = Some(reply.clone());
                reply
            }
            None => self
                .last
                .lock()
                .clone()
                .unwrap_or_else(|| Err("no scripted reply".into())),
        };
        reply.map_err(Error::Connection)
    }
}
