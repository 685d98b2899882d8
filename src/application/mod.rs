//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the patent lookup use case.

pub mod classifier;
pub mod metadata;
pub mod presenter;
pub mod service;

pub use classifier::Classifier;
pub use metadata::MetadataFetcher;
pub use presenter::present;
pub use service::LookupService;
