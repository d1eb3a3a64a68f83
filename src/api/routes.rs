//! API route configuration.
//!
//! Everything except [`public_routes`] requires Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_city_handler, create_country_handler, create_state_handler, delete_city_handler,
    delete_country_handler, delete_state_handler, get_city_handler, get_country_handler,
    get_state_handler, list_cities_by_country_handler, list_cities_by_state_handler,
    list_cities_handler, list_countries_handler, list_states_by_country_handler,
    list_states_handler, login_handler, update_city_handler, update_country_handler,
    update_state_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Hierarchy routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET|POST        /countries`
/// - `GET|PUT|DELETE  /countries/{id}`
/// - `GET|POST        /states`
/// - `GET|PUT|DELETE  /states/{id}`
/// - `GET             /states/country/{country_id}`
/// - `GET|POST        /cities`
/// - `GET|PUT|DELETE  /cities/{id}`
/// - `GET             /cities/state/{state_id}`
/// - `GET             /cities/country/{country_id}`
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/countries",
            get(list_countries_handler).post(create_country_handler),
        )
        .route(
            "/countries/{id}",
            get(get_country_handler)
                .put(update_country_handler)
                .delete(delete_country_handler),
        )
        .route(
            "/states",
            get(list_states_handler).post(create_state_handler),
        )
        .route(
            "/states/{id}",
            get(get_state_handler)
                .put(update_state_handler)
                .delete(delete_state_handler),
        )
        .route(
            "/states/country/{country_id}",
            get(list_states_by_country_handler),
        )
        .route(
            "/cities",
            get(list_cities_handler).post(create_city_handler),
        )
        .route(
            "/cities/{id}",
            get(get_city_handler)
                .put(update_city_handler)
                .delete(delete_city_handler),
        )
        .route("/cities/state/{state_id}", get(list_cities_by_state_handler))
        .route(
            "/cities/country/{country_id}",
            get(list_cities_by_country_handler),
        )
}

/// Routes reachable without a token.
///
/// - `POST /auth/login` - Exchange credentials for a bearer token
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login_handler))
}
