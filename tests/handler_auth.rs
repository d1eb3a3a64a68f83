mod common;

use axum_test::TestServer;
use geo_registry::application::services::{AuthService, JwtConfig};
use serde_json::json;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> (TestServer, geo_registry::AppState) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::api_router(state.clone())).unwrap();
    (server, state)
}

#[sqlx::test]
async fn test_login_returns_token(pool: PgPool) {
    let (server, _) = make_server(pool);

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "admin", "password": "secret" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(!json["token"].as_str().unwrap().is_empty());
    assert!(json.get("expiresAt").is_some());
}

#[sqlx::test]
async fn test_login_token_opens_protected_routes(pool: PgPool) {
    let (server, _) = make_server(pool);

    let login = server
        .post("/api/auth/login")
        .json(&json!({ "username": "admin", "password": "secret" }))
        .await
        .json::<serde_json::Value>();
    let token = login["token"].as_str().unwrap();

    let response = server
        .get("/api/countries")
        .add_header("Authorization", format!("Bearer {token}"))
        .await;

    response.assert_status_ok();
}

#[sqlx::test]
async fn test_login_blank_credentials(pool: PgPool) {
    let (server, _) = make_server(pool);

    for body in [
        json!({ "username": "", "password": "secret" }),
        json!({ "username": "admin", "password": "   " }),
        json!({}),
    ] {
        let response = server.post("/api/auth/login").json(&body).await;

        response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["message"],
            "Username and password are required"
        );
    }
}

#[sqlx::test]
async fn test_missing_token_is_unauthorized(pool: PgPool) {
    let (server, _) = make_server(pool);

    let response = server.get("/api/countries").await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(response.header("www-authenticate"), "Bearer");
}

#[sqlx::test]
async fn test_garbage_token_is_unauthorized(pool: PgPool) {
    let (server, _) = make_server(pool);

    let response = server
        .get("/api/states")
        .add_header("Authorization", "Bearer not-a-jwt")
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_token_signed_with_other_secret(pool: PgPool) {
    let (server, _) = make_server(pool);

    let foreign = AuthService::new(JwtConfig {
        secret: "another-secret-that-is-also-long-enough".to_string(),
        ..common::test_jwt_config()
    });
    let token = foreign.issue_token("intruder").unwrap().token;

    let response = server
        .get("/api/cities")
        .add_header("Authorization", format!("Bearer {token}"))
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_expired_token(pool: PgPool) {
    let (server, _) = make_server(pool);

    let stale = AuthService::new(JwtConfig {
        expiration_minutes: -5,
        ..common::test_jwt_config()
    });
    let token = stale.issue_token("late").unwrap().token;

    let response = server
        .get("/api/countries")
        .add_header("Authorization", format!("Bearer {token}"))
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_issued_token_accepted(pool: PgPool) {
    let (server, state) = make_server(pool);

    let response = server
        .get("/api/cities")
        .add_header("Authorization", common::bearer(&state))
        .await;

    response.assert_status_ok();
}
