//! Handlers for state endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::state::{StateItem, StateRequest};
use crate::error::AppError;
use crate::state::AppState;

fn state_not_found(id: i64) -> AppError {
    AppError::not_found("State not found", json!({ "id": id }))
}

/// `GET /api/states`
pub async fn list_states_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StateItem>>, AppError> {
    let states = state.state_service.list_states().await?;

    Ok(Json(states.into_iter().map(StateItem::from).collect()))
}

/// `GET /api/states/country/{countryId}`
///
/// An unknown country yields an empty list.
pub async fn list_states_by_country_handler(
    Path(country_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<StateItem>>, AppError> {
    let states = state.state_service.list_states_by_country(country_id).await?;

    Ok(Json(states.into_iter().map(StateItem::from).collect()))
}

/// `GET /api/states/{id}`
pub async fn get_state_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<StateItem>, AppError> {
    let details = state
        .state_service
        .find_state(id)
        .await?
        .ok_or_else(|| state_not_found(id))?;

    Ok(Json(details.into()))
}

/// Creates a state inside an existing country.
///
/// # Endpoint
///
/// `POST /api/states`
///
/// # Errors
///
/// Returns 400 if input is invalid or the country does not exist.
/// Returns 409 if the country already has a state with this code.
pub async fn create_state_handler(
    State(state): State<AppState>,
    Json(payload): Json<StateRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<StateItem>), AppError> {
    payload.validate()?;

    let details = state
        .state_service
        .create_state(payload.name, payload.code, payload.country_id)
        .await?;

    let location = format!("/api/states/{}", details.state.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(details.into()),
    ))
}

/// Replaces a state, possibly moving it to another country.
///
/// # Endpoint
///
/// `PUT /api/states/{id}`
///
/// # Errors
///
/// Returns 400 if input is invalid or the country does not exist.
/// Returns 404 if the state does not exist.
/// Returns 409 if the target country already has a state with this code.
pub async fn update_state_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<StateRequest>,
) -> Result<Json<StateItem>, AppError> {
    payload.validate()?;

    let details = state
        .state_service
        .update_state(id, payload.name, payload.code, payload.country_id)
        .await?;

    Ok(Json(details.into()))
}

/// `DELETE /api/states/{id}`, cascading to the state's cities.
pub async fn delete_state_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if state.state_service.delete_state(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(state_not_found(id))
    }
}
