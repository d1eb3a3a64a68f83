//! Domain entity representing a state, owned by exactly one country.

use chrono::{DateTime, Utc};

/// A state (province, region) inside a country.
///
/// `code` is unique within its country only; two countries may each have a
/// state coded `"NY"`.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub country_id: i64,
    pub created_at: DateTime<Utc>,
}

impl State {
    pub fn new(
        id: i64,
        name: String,
        code: String,
        country_id: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            code,
            country_id,
            created_at,
        }
    }
}

/// Input data for creating a new state.
#[derive(Debug, Clone, PartialEq)]
pub struct NewState {
    pub name: String,
    pub code: String,
    pub country_id: i64,
}

/// Full replacement of a state's mutable fields, including its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateState {
    pub name: String,
    pub code: String,
    pub country_id: i64,
}

/// A state together with the name of its owning country.
///
/// `country_name` is resolved at read time and is `None` when the parent
/// could not be found.
#[derive(Debug, Clone, PartialEq)]
pub struct StateDetails {
    pub state: State,
    pub country_name: Option<String>,
}
