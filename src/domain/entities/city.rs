//! Domain entity representing a city, the leaf of the hierarchy.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub state_id: i64,
    pub population: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl City {
    pub fn new(
        id: i64,
        name: String,
        state_id: i64,
        population: Option<i64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            state_id,
            population,
            created_at,
        }
    }
}

/// Input data for creating a new city.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCity {
    pub name: String,
    pub state_id: i64,
    pub population: Option<i64>,
}

/// Full replacement of a city's mutable fields, including its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCity {
    pub name: String,
    pub state_id: i64,
    pub population: Option<i64>,
}

/// A city with its state and country resolved through the ownership chain.
///
/// Each denormalized field is `None` when its link in the chain is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct CityDetails {
    pub city: City,
    pub state_name: Option<String>,
    pub country_id: Option<i64>,
    pub country_name: Option<String>,
}
