//! Repository trait for city storage.

use crate::domain::entities::{City, NewCity, UpdateCity};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for cities.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCityRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Inserts a new city.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidReference`] if the state no longer exists.
    async fn create(&self, new_city: NewCity) -> Result<City, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<City>, AppError>;

    /// Lists all cities ordered by name.
    async fn list(&self) -> Result<Vec<City>, AppError>;

    /// Lists the cities of one state ordered by name.
    async fn list_by_state(&self, state_id: i64) -> Result<Vec<City>, AppError>;

    /// Lists the cities of every state in one country, ordered by name.
    async fn list_by_country(&self, country_id: i64) -> Result<Vec<City>, AppError>;

    /// Overwrites name, parent state and population.
    ///
    /// Returns `Ok(None)` if the city does not exist.
    async fn update(&self, id: i64, update: UpdateCity) -> Result<Option<City>, AppError>;

    /// Deletes a city. Returns `false` if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
