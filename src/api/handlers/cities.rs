//! Handlers for city endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::city::{CityItem, CityRequest};
use crate::domain::entities::CityDetails;
use crate::error::AppError;
use crate::state::AppState;

fn city_not_found(id: i64) -> AppError {
    AppError::not_found("City not found", json!({ "id": id }))
}

fn to_items(cities: Vec<CityDetails>) -> Json<Vec<CityItem>> {
    Json(cities.into_iter().map(CityItem::from).collect())
}

/// `GET /api/cities`
pub async fn list_cities_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CityItem>>, AppError> {
    Ok(to_items(state.city_service.list_cities().await?))
}

/// `GET /api/cities/state/{stateId}`
pub async fn list_cities_by_state_handler(
    Path(state_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<CityItem>>, AppError> {
    Ok(to_items(
        state.city_service.list_cities_by_state(state_id).await?,
    ))
}

/// `GET /api/cities/country/{countryId}`
pub async fn list_cities_by_country_handler(
    Path(country_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<CityItem>>, AppError> {
    Ok(to_items(
        state.city_service.list_cities_by_country(country_id).await?,
    ))
}

/// `GET /api/cities/{id}`
pub async fn get_city_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CityItem>, AppError> {
    let details = state
        .city_service
        .find_city(id)
        .await?
        .ok_or_else(|| city_not_found(id))?;

    Ok(Json(details.into()))
}

/// Creates a city inside an existing state.
///
/// # Endpoint
///
/// `POST /api/cities`
///
/// # Errors
///
/// Returns 400 if input is invalid or the state does not exist.
pub async fn create_city_handler(
    State(state): State<AppState>,
    Json(payload): Json<CityRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<CityItem>), AppError> {
    payload.validate()?;

    let details = state
        .city_service
        .create_city(payload.name, payload.state_id, payload.population)
        .await?;

    let location = format!("/api/cities/{}", details.city.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(details.into()),
    ))
}

/// Replaces a city.
///
/// # Endpoint
///
/// `PUT /api/cities/{id}`
///
/// # Errors
///
/// Returns 400 if input is invalid or the state does not exist.
/// Returns 404 if the city does not exist.
pub async fn update_city_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<CityRequest>,
) -> Result<Json<CityItem>, AppError> {
    payload.validate()?;

    let details = state
        .city_service
        .update_city(id, payload.name, payload.state_id, payload.population)
        .await?;

    Ok(Json(details.into()))
}

/// `DELETE /api/cities/{id}`
pub async fn delete_city_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if state.city_service.delete_city(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(city_not_found(id))
    }
}
