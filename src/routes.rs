//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`          - Health check with entity counts (public)
//! - `POST /api/auth/login`  - Token issuance (public)
//! - `/api/*`                - Country / state / city CRUD (Bearer token required)
//!
//! # Middleware
//!
//! - **CORS** - Configured frontend origins
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api`
//! - **Authentication** - JWT bearer token on protected routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, cors, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Rate limiting keys on the peer address, so the router must be served with
/// connect info (see [`crate::server::run`]).
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = Router::new()
        .merge(protected)
        .merge(api::routes::public_routes())
        .layer(rate_limit::layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        )?);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
        .layer(cors::layer(&config.cors_allowed_origins));

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
