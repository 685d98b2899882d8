//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`]: driving adapters (CLI, web) that call the lookup service
//! - [`outbound`]: driven adapters (LLM, patent search, SQLite) the service calls

pub mod inbound;
pub mod outbound;
