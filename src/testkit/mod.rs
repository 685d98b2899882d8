//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`cache`] - [`MemoryCache`](cache::MemoryCache), an in-memory
//!   [`PatentCache`](crate::port::outbound::cache::PatentCache).
//! - [`search`] - [`StubSearch`](search::StubSearch), a counting
//!   [`PatentSearch`](crate::port::outbound::search::PatentSearch).
//! - [`llm`] - [`ScriptedLlm`](llm::ScriptedLlm), a counting
//!   [`Llm`](crate::port::outbound::llm::Llm) with queued replies.
//! - [`fixture`] - Canned search bodies and model replies.

pub mod cache;
pub mod fixture;
pub mod llm;
pub mod search;
