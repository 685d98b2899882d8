//! Driving adapters: the user-facing surfaces.

pub mod cli;
pub mod web;
