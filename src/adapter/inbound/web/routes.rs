//! Axum router and server for the web surface.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::page::{self, Outcome};
use crate::error::{Error, Result};
use crate::port::inbound::lookup::{Lookup, PatentLookup};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<dyn PatentLookup>,
}

#[derive(Debug, Deserialize)]
pub struct FormQuery {
    #[serde(default)]
    patent: Option<String>,
}

/// Build the router over a lookup service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form))
        .route("/api/patents/{id}", get(api_patent))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn serve(addr: SocketAddr, lookup: Arc<dyn PatentLookup>) -> Result<()> {
    let app = router(AppState { lookup });
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "web server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;
    Ok(())
}

async fn form(State(state): State<AppState>, Query(query): Query<FormQuery>) -> Html<String> {
    let input = query.patent.unwrap_or_default();
    if input.trim().is_empty() {
        return Html(page::render(&input, None));
    }

    let outcome = match state.lookup.lookup(&input).await {
        Ok(lookup) => Outcome::Lookup(lookup),
        Err(e) => {
            error!(error = %e, "lookup failed");
            Outcome::Error(e.to_string())
        }
    };
    Html(page::render(&input, Some(&outcome)))
}

async fn api_patent(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.lookup.lookup(&id).await {
        Ok(lookup @ Lookup::Found(_)) => Json(lookup).into_response(),
        Ok(lookup @ Lookup::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, Json(lookup)).into_response()
        }
        Err(Error::InvalidInput(message)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
