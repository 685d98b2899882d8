//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (search API, LLM providers, the cache database) or that
//! surfaces call into (CLI, web form).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!      CLI / web ───►│      Application        │
//!                    │  Domain + Port          │
//!                    └─────────────────────────┘
//!                      │          │          │
//!                      ▼          ▼          ▼
//!                 ┌────────┐ ┌────────┐ ┌─────────┐
//!                 │ Search │ │  LLM   │ │  Cache  │
//!                 │Adapter │ │Adapter │ │ Adapter │
//!                 └────────┘ └────────┘ └─────────┘
//! ```

pub mod inbound;
pub mod outbound;
