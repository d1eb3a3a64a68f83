//! City management service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{City, CityDetails, Country, NewCity, State, UpdateCity};
use crate::domain::repositories::{CityRepository, CountryRepository, StateRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for managing cities.
///
/// Cities have no uniqueness constraint; the only invariant is that
/// `state_id` references an existing state whenever a city is written.
/// Responses follow the chain city → state → country to attach names.
pub struct CityService<Ci: CityRepository, S: StateRepository, C: CountryRepository> {
    city_repository: Arc<Ci>,
    state_repository: Arc<S>,
    country_repository: Arc<C>,
}

impl<Ci, S, C> CityService<Ci, S, C>
where
    Ci: CityRepository,
    S: StateRepository,
    C: CountryRepository,
{
    /// Creates a new city service.
    pub fn new(
        city_repository: Arc<Ci>,
        state_repository: Arc<S>,
        country_repository: Arc<C>,
    ) -> Self {
        Self {
            city_repository,
            state_repository,
            country_repository,
        }
    }

    /// Lists all cities.
    pub async fn list_cities(&self) -> Result<Vec<CityDetails>, AppError> {
        let cities = self.city_repository.list().await?;
        self.with_parents(cities).await
    }

    /// Lists the cities of one state.
    pub async fn list_cities_by_state(&self, state_id: i64) -> Result<Vec<CityDetails>, AppError> {
        let cities = self.city_repository.list_by_state(state_id).await?;
        self.with_parents(cities).await
    }

    /// Lists the cities of every state in one country.
    pub async fn list_cities_by_country(
        &self,
        country_id: i64,
    ) -> Result<Vec<CityDetails>, AppError> {
        let cities = self.city_repository.list_by_country(country_id).await?;
        self.with_parents(cities).await
    }

    /// Retrieves a city by id, `None` if absent.
    pub async fn find_city(&self, id: i64) -> Result<Option<CityDetails>, AppError> {
        let Some(city) = self.city_repository.find_by_id(id).await? else {
            return Ok(None);
        };

        let state = self.state_repository.find_by_id(city.state_id).await?;
        let details = self.attach(city, state).await?;

        Ok(Some(details))
    }

    /// Creates a new city inside an existing state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidReference`] if the state does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_city(
        &self,
        name: String,
        state_id: i64,
        population: Option<i64>,
    ) -> Result<CityDetails, AppError> {
        let state = self.require_state(state_id).await?;

        let city = self
            .city_repository
            .create(NewCity {
                name,
                state_id,
                population,
            })
            .await?;

        tracing::info!(id = city.id, state_id, "City created");

        self.attach(city, Some(state)).await
    }

    /// Replaces a city's name, state and population.
    ///
    /// The state is re-validated on every update, even when it did not change.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the city does not exist.
    /// Returns [`AppError::InvalidReference`] if the state does not exist.
    pub async fn update_city(
        &self,
        id: i64,
        name: String,
        state_id: i64,
        population: Option<i64>,
    ) -> Result<CityDetails, AppError> {
        if self.city_repository.find_by_id(id).await?.is_none() {
            return Err(city_not_found(id));
        }

        let state = self.require_state(state_id).await?;

        let city = self
            .city_repository
            .update(
                id,
                UpdateCity {
                    name,
                    state_id,
                    population,
                },
            )
            .await?
            .ok_or_else(|| city_not_found(id))?;

        tracing::info!(id, state_id, "City updated");

        self.attach(city, Some(state)).await
    }

    /// Deletes a city. Returns `false` if the city did not exist.
    pub async fn delete_city(&self, id: i64) -> Result<bool, AppError> {
        let deleted = self.city_repository.delete(id).await?;

        if deleted {
            tracing::info!(id, "City deleted");
        }

        Ok(deleted)
    }

    /// Counts all cities.
    pub async fn count_cities(&self) -> Result<i64, AppError> {
        self.city_repository.count().await
    }

    async fn require_state(&self, state_id: i64) -> Result<State, AppError> {
        self.state_repository
            .find_by_id(state_id)
            .await?
            .ok_or_else(|| {
                AppError::invalid_reference(
                    format!("State with ID {state_id} does not exist."),
                    json!({ "state_id": state_id }),
                )
            })
    }

    /// Shapes a single city given its (possibly missing) state.
    async fn attach(&self, city: City, state: Option<State>) -> Result<CityDetails, AppError> {
        let Some(state) = state else {
            return Ok(CityDetails {
                city,
                state_name: None,
                country_id: None,
                country_name: None,
            });
        };

        let country_name = self
            .country_repository
            .find_by_id(state.country_id)
            .await?
            .map(|c| c.name);

        Ok(CityDetails {
            city,
            state_name: Some(state.name),
            country_id: Some(state.country_id),
            country_name,
        })
    }

    /// Shapes a list with two batched lookups: parent states, then their countries.
    async fn with_parents(&self, cities: Vec<City>) -> Result<Vec<CityDetails>, AppError> {
        let state_ids = distinct(cities.iter().map(|c| c.state_id));
        let states: HashMap<i64, State> = self
            .state_repository
            .find_by_ids(&state_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let country_ids = distinct(states.values().map(|s| s.country_id));
        let countries: HashMap<i64, Country> = self
            .country_repository
            .find_by_ids(&country_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(cities
            .into_iter()
            .map(|city| {
                let state = states.get(&city.state_id);
                let country = state.and_then(|s| countries.get(&s.country_id));

                CityDetails {
                    state_name: state.map(|s| s.name.clone()),
                    country_id: state.map(|s| s.country_id),
                    country_name: country.map(|c| c.name.clone()),
                    city,
                }
            })
            .collect())
    }
}

fn distinct(ids: impl Iterator<Item = i64>) -> Vec<i64> {
    let mut ids: Vec<i64> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn city_not_found(id: i64) -> AppError {
    AppError::not_found("City not found", json!({ "id": id }))
}
