//! Minimal web surface: one lookup form plus a JSON API.
//!
//! Routes:
//! - `GET /` renders the form; `GET /?patent=ID` also renders the result
//! - `GET /api/patents/{id}` returns the lookup as JSON (404 when not found)
//! - `GET /health` returns `{"status":"ok"}`

pub mod page;
pub mod routes;

pub use routes::{router, serve, AppState};
