#![allow(dead_code)]

use geo_registry::application::services::JwtConfig;
use geo_registry::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret-of-at-least-32-bytes";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        issuer: "geo-registry".to_string(),
        audience: "geo-registry".to_string(),
        expiration_minutes: 60,
    }
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), test_jwt_config())
}

/// `Authorization` header value carrying a freshly signed token.
pub fn bearer(state: &AppState) -> String {
    let issued = state.auth_service.issue_token("tester").unwrap();
    format!("Bearer {}", issued.token)
}

pub async fn create_test_country(pool: &PgPool, name: &str, code: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO countries (name, code) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_state_row(pool: &PgPool, name: &str, code: &str, country_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO states (name, code, country_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(code)
    .bind(country_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_city(
    pool: &PgPool,
    name: &str,
    state_id: i64,
    population: Option<i64>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO cities (name, state_id, population) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(state_id)
    .bind(population)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Full `/api` surface behind the bearer middleware, without rate limiting
/// (the peer-IP extractor needs connect info the test transport lacks).
pub fn api_router(state: AppState) -> axum::Router {
    use geo_registry::api::middleware::auth;
    use geo_registry::api::routes::{protected_routes, public_routes};

    let protected =
        protected_routes().route_layer(axum::middleware::from_fn_with_state(state.clone(), auth::layer));

    axum::Router::new()
        .nest("/api", protected.merge(public_routes()))
        .with_state(state)
}
