mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use geo_registry::api::handlers::{
    create_country_handler, delete_country_handler, get_country_handler, list_countries_handler,
    update_country_handler,
};
use serde_json::json;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/countries", get(list_countries_handler))
        .route("/api/countries", post(create_country_handler))
        .route(
            "/api/countries/{id}",
            get(get_country_handler)
                .put(update_country_handler)
                .delete(delete_country_handler),
        )
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_country_success(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/countries")
        .json(&json!({ "name": "United States", "code": "usa" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["name"], "United States");
    assert_eq!(json["code"], "USA");
    assert!(json["id"].as_i64().unwrap() > 0);
    assert!(json.get("createdAt").is_some());

    let location = response.header("location");
    assert_eq!(
        location.to_str().unwrap(),
        format!("/api/countries/{}", json["id"])
    );
}

#[sqlx::test]
async fn test_create_country_trims_code(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/countries")
        .json(&json!({ "name": "Germany", "code": " deu " }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["code"], "DEU");
}

#[sqlx::test]
async fn test_create_country_duplicate_code(pool: PgPool) {
    let server = make_server(pool);

    server
        .post("/api/countries")
        .json(&json!({ "name": "First", "code": "DUP" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/api/countries")
        .json(&json!({ "name": "Second", "code": "dup" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
}

#[sqlx::test]
async fn test_create_country_bad_code_length(pool: PgPool) {
    let server = make_server(pool);

    for code in ["US", "USAA"] {
        let response = server
            .post("/api/countries")
            .json(&json!({ "name": "Somewhere", "code": code }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "validation_error"
        );
    }
}

#[sqlx::test]
async fn test_create_country_blank_name(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/countries")
        .json(&json!({ "name": "   ", "code": "BLK" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"].get("name").is_some());
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_countries(pool: PgPool) {
    common::create_test_country(&pool, "Peru", "PER").await;
    common::create_test_country(&pool, "Bolivia", "BOL").await;
    let server = make_server(pool);

    let response = server.get("/api/countries").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Bolivia");
    assert_eq!(items[1]["name"], "Peru");
}

#[sqlx::test]
async fn test_get_country(pool: PgPool) {
    let id = common::create_test_country(&pool, "Japan", "JPN").await;
    let server = make_server(pool);

    let response = server.get(&format!("/api/countries/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["code"], "JPN");
}

#[sqlx::test]
async fn test_get_country_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/countries/999999").await;

    response.assert_status_not_found();
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_country(pool: PgPool) {
    let id = common::create_test_country(&pool, "Siam", "SIA").await;
    let server = make_server(pool);

    let response = server
        .put(&format!("/api/countries/{id}"))
        .json(&json!({ "name": "Thailand", "code": "tha" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Thailand");
    assert_eq!(json["code"], "THA");
}

#[sqlx::test]
async fn test_update_country_keeps_own_code(pool: PgPool) {
    let id = common::create_test_country(&pool, "France", "FRA").await;
    let server = make_server(pool);

    let response = server
        .put(&format!("/api/countries/{id}"))
        .json(&json!({ "name": "French Republic", "code": "FRA" }))
        .await;

    response.assert_status_ok();
}

#[sqlx::test]
async fn test_update_country_code_taken(pool: PgPool) {
    common::create_test_country(&pool, "Italy", "ITA").await;
    let id = common::create_test_country(&pool, "Spain", "ESP").await;
    let server = make_server(pool);

    let response = server
        .put(&format!("/api/countries/{id}"))
        .json(&json!({ "name": "Spain", "code": "ITA" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_update_country_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .put("/api/countries/999999")
        .json(&json!({ "name": "Nowhere", "code": "NOW" }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_country(pool: PgPool) {
    let id = common::create_test_country(&pool, "Temporary", "TMP").await;
    let server = make_server(pool);

    server
        .delete(&format!("/api/countries/{id}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/countries/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_country_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.delete("/api/countries/999999").await;

    response.assert_status_not_found();
}
