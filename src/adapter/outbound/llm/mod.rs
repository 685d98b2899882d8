//! LLM adapter modules.
//!
//! Provides implementations of the [`Llm`](crate::port::outbound::llm::Llm) trait
//! for OpenAI, any OpenAI-compatible chat-completions endpoint, and
//! Anthropic Claude.

pub mod anthropic;
pub mod chat;
pub mod openai;
