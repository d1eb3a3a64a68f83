//! DTOs for city endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;
use crate::domain::entities::CityDetails;

/// Body of `POST /api/cities` and `PUT /api/cities/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CityRequest {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,

    pub state_id: i64,

    #[validate(range(min = 0))]
    pub population: Option<i64>,
}

/// A city with its state and country resolved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityItem {
    pub id: i64,
    pub name: String,
    pub state_id: i64,
    pub state_name: Option<String>,
    pub country_id: Option<i64>,
    pub country_name: Option<String>,
    pub population: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<CityDetails> for CityItem {
    fn from(d: CityDetails) -> Self {
        Self {
            id: d.city.id,
            name: d.city.name,
            state_id: d.city.state_id,
            state_name: d.state_name,
            country_id: d.country_id,
            country_name: d.country_name,
            population: d.city.population,
            created_at: d.city.created_at,
        }
    }
}
