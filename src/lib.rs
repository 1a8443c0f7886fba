//! Purchase price engine for reselling imported goods.
//!
//! The [`pricing`] module holds the pure calculation engine; the rest of the
//! crate exposes it over a small Axum JSON API.

pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .nest("/api/pricing", pricing::router())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
