//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: the patent search
//! API, LLM completion providers and the local patent cache.

pub mod cache;
pub mod llm;
pub mod search;
