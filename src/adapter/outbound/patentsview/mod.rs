//! PatentsView search adapter.
//!
//! Implements [`PatentSearch`](crate::port::outbound::search::PatentSearch)
//! over the PatentsView HTTP query API.

pub mod client;

pub use client::{PatentsView, DEFAULT_BASE_URL};
