//! State management service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Country, NewState, State, StateDetails, UpdateState};
use crate::domain::repositories::{CountryRepository, StateRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for managing states.
///
/// Enforces:
/// - `country_id` references an existing country on create and update
/// - `(code, country_id)` is unique; the same code may repeat across countries
///
/// Every returned state carries its country's name, looked up by id.
pub struct StateService<S: StateRepository, C: CountryRepository> {
    state_repository: Arc<S>,
    country_repository: Arc<C>,
}

impl<S: StateRepository, C: CountryRepository> StateService<S, C> {
    /// Creates a new state service.
    pub fn new(state_repository: Arc<S>, country_repository: Arc<C>) -> Self {
        Self {
            state_repository,
            country_repository,
        }
    }

    /// Lists all states with their country names.
    pub async fn list_states(&self) -> Result<Vec<StateDetails>, AppError> {
        let states = self.state_repository.list().await?;
        self.with_country_names(states).await
    }

    /// Lists the states of one country. An unknown country yields an empty list.
    pub async fn list_states_by_country(
        &self,
        country_id: i64,
    ) -> Result<Vec<StateDetails>, AppError> {
        let states = self.state_repository.list_by_country(country_id).await?;
        self.with_country_names(states).await
    }

    /// Retrieves a state by id, `None` if absent.
    pub async fn find_state(&self, id: i64) -> Result<Option<StateDetails>, AppError> {
        let Some(state) = self.state_repository.find_by_id(id).await? else {
            return Ok(None);
        };

        let country_name = self
            .country_repository
            .find_by_id(state.country_id)
            .await?
            .map(|c| c.name);

        Ok(Some(StateDetails {
            state,
            country_name,
        }))
    }

    /// Creates a new state inside an existing country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidReference`] if the country does not exist.
    /// Returns [`AppError::Conflict`] if the country already has a state with this code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_state(
        &self,
        name: String,
        code: String,
        country_id: i64,
    ) -> Result<StateDetails, AppError> {
        let country = self.require_country(country_id).await?;

        if self
            .state_repository
            .find_by_code(&code, country_id)
            .await?
            .is_some()
        {
            tracing::debug!(%code, country_id, "Rejected duplicate state code");
            return Err(duplicate_code(&code, country_id));
        }

        let state = self
            .state_repository
            .create(NewState {
                name,
                code,
                country_id,
            })
            .await?;

        tracing::info!(id = state.id, country_id, code = %state.code, "State created");

        Ok(StateDetails {
            state,
            country_name: Some(country.name),
        })
    }

    /// Replaces a state's name, code and parent country.
    ///
    /// The parent is re-validated even when unchanged, and the uniqueness check
    /// ignores the state being updated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the state does not exist.
    /// Returns [`AppError::InvalidReference`] if the country does not exist.
    /// Returns [`AppError::Conflict`] if another state in that country uses the code.
    pub async fn update_state(
        &self,
        id: i64,
        name: String,
        code: String,
        country_id: i64,
    ) -> Result<StateDetails, AppError> {
        if self.state_repository.find_by_id(id).await?.is_none() {
            return Err(state_not_found(id));
        }

        let country = self.require_country(country_id).await?;

        if let Some(existing) = self.state_repository.find_by_code(&code, country_id).await?
            && existing.id != id
        {
            tracing::debug!(%code, country_id, owner = existing.id, "Rejected duplicate state code");
            return Err(duplicate_code(&code, country_id));
        }

        let state = self
            .state_repository
            .update(
                id,
                UpdateState {
                    name,
                    code,
                    country_id,
                },
            )
            .await?
            .ok_or_else(|| state_not_found(id))?;

        tracing::info!(id, country_id, "State updated");

        Ok(StateDetails {
            state,
            country_name: Some(country.name),
        })
    }

    /// Deletes a state together with its cities.
    ///
    /// Returns `false` if the state did not exist.
    pub async fn delete_state(&self, id: i64) -> Result<bool, AppError> {
        let deleted = self.state_repository.delete(id).await?;

        if deleted {
            tracing::info!(id, "State deleted");
        }

        Ok(deleted)
    }

    /// Counts all states.
    pub async fn count_states(&self) -> Result<i64, AppError> {
        self.state_repository.count().await
    }

    /// Resolves the parent country: existence check first, then fetch.
    async fn require_country(&self, country_id: i64) -> Result<Country, AppError> {
        if !self.country_repository.exists(country_id).await? {
            return Err(missing_country(country_id));
        }

        self.country_repository
            .find_by_id(country_id)
            .await?
            .ok_or_else(|| missing_country(country_id))
    }

    /// Attaches country names with one batched lookup.
    async fn with_country_names(
        &self,
        states: Vec<State>,
    ) -> Result<Vec<StateDetails>, AppError> {
        let mut country_ids: Vec<i64> = states.iter().map(|s| s.country_id).collect();
        country_ids.sort_unstable();
        country_ids.dedup();

        let names: HashMap<i64, String> = self
            .country_repository
            .find_by_ids(&country_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(states
            .into_iter()
            .map(|state| {
                let country_name = names.get(&state.country_id).cloned();
                StateDetails {
                    state,
                    country_name,
                }
            })
            .collect())
    }
}

fn missing_country(country_id: i64) -> AppError {
    AppError::invalid_reference(
        format!("Country with ID {country_id} does not exist."),
        json!({ "country_id": country_id }),
    )
}

fn duplicate_code(code: &str, country_id: i64) -> AppError {
    AppError::conflict(
        format!("State with code '{code}' already exists in this country."),
        json!({ "code": code, "country_id": country_id }),
    )
}

fn state_not_found(id: i64) -> AppError {
    AppError::not_found("State not found", json!({ "id": id }))
}
