//! Driven adapters for external systems.

pub mod llm;
pub mod patentsview;
pub mod sqlite;
