//! Handlers for country endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::country::{CountryItem, CountryRequest};
use crate::error::AppError;
use crate::state::AppState;

fn country_not_found(id: i64) -> AppError {
    AppError::not_found("Country not found", json!({ "id": id }))
}

/// Lists all countries ordered by name.
///
/// # Endpoint
///
/// `GET /api/countries`
pub async fn list_countries_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountryItem>>, AppError> {
    let countries = state.country_service.list_countries().await?;

    Ok(Json(countries.into_iter().map(CountryItem::from).collect()))
}

/// Returns a single country.
///
/// # Endpoint
///
/// `GET /api/countries/{id}`
///
/// # Errors
///
/// Returns 404 if the country does not exist.
pub async fn get_country_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CountryItem>, AppError> {
    let country = state
        .country_service
        .find_country(id)
        .await?
        .ok_or_else(|| country_not_found(id))?;

    Ok(Json(country.into()))
}

/// Creates a new country.
///
/// # Endpoint
///
/// `POST /api/countries`
///
/// # Errors
///
/// Returns 400 if the name is invalid or the code is not 3 characters.
/// Returns 409 if the code is already taken.
pub async fn create_country_handler(
    State(state): State<AppState>,
    Json(payload): Json<CountryRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<CountryItem>), AppError> {
    payload.validate()?;

    let country = state
        .country_service
        .create_country(payload.name, payload.code)
        .await?;

    let location = format!("/api/countries/{}", country.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(country.into()),
    ))
}

/// Replaces a country's name and code.
///
/// # Endpoint
///
/// `PUT /api/countries/{id}`
///
/// # Errors
///
/// Returns 400 on invalid input, 404 if the country does not exist, 409 if
/// another country owns the code.
pub async fn update_country_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<CountryRequest>,
) -> Result<Json<CountryItem>, AppError> {
    payload.validate()?;

    let country = state
        .country_service
        .update_country(id, payload.name, payload.code)
        .await?;

    Ok(Json(country.into()))
}

/// Deletes a country together with its states and cities.
///
/// # Endpoint
///
/// `DELETE /api/countries/{id}`
///
/// # Errors
///
/// Returns 404 if the country does not exist.
pub async fn delete_country_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if state.country_service.delete_country(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(country_not_found(id))
    }
}
