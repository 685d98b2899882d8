//! Patentcat - look up a US patent and classify it with an LLM.
//!
//! Given a patent number, the crate fetches bibliographic metadata from the
//! PatentsView search API, asks a language model to assign IPC, CPC and USPC
//! labels, and caches both in a local SQLite database so repeat lookups never
//! hit the network.
//!
//! # Architecture
//!
//! - [`domain`] - Patent identifiers, metadata, classification results and
//!   the presentation report
//! - [`port`] - Traits at the edges: inbound [`port::inbound::lookup::PatentLookup`],
//!   outbound search, LLM and cache
//! - [`adapter`] - CLI and web surfaces; PatentsView, LLM and SQLite backends
//! - [`application`] - Metadata fetching, classification and the lookup
//!   pipeline that ties them together
//! - [`infrastructure`] - Configuration loading and the factories that build
//!   a wired-up service
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use patentcat::infrastructure::config::settings::Config;
//! use patentcat::infrastructure::factory::build_lookup_service;
//! use patentcat::port::inbound::lookup::PatentLookup;
//!
//! # async fn demo() -> patentcat::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let service = build_lookup_service(&config)?;
//! let outcome = service.lookup("11234567").await?;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
