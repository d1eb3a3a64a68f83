//! DTOs for state endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;
use crate::domain::entities::StateDetails;

/// Body of `POST /api/states` and `PUT /api/states/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StateRequest {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,

    #[validate(length(min = 1, max = 10), custom(function = "not_blank"))]
    pub code: String,

    pub country_id: i64,
}

/// A state with its owning country's name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateItem {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub country_id: i64,
    pub country_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<StateDetails> for StateItem {
    fn from(d: StateDetails) -> Self {
        Self {
            id: d.state.id,
            name: d.state.name,
            code: d.state.code,
            country_id: d.state.country_id,
            country_name: d.country_name,
            created_at: d.state.created_at,
        }
    }
}
