//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`lookup`]: the single patent lookup use case behind the CLI and the
//!   web form.

pub mod lookup;
