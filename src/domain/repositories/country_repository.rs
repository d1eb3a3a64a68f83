//! Repository trait for country storage.

use crate::domain::entities::{Country, NewCountry, UpdateCountry};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for countries.
///
/// Deleting a country removes its states and their cities; the cascade is
/// performed by the store, not by callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCountryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_country.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Inserts a new country. The store assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_country: NewCountry) -> Result<Country, AppError>;

    /// Finds a country by its database ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Country>, AppError>;

    /// Finds all countries whose id is in `ids`. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Country>, AppError>;

    /// Finds a country by its exact (already normalized) code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Country>, AppError>;

    /// Returns whether a country with this id exists.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Lists all countries ordered by name.
    async fn list(&self) -> Result<Vec<Country>, AppError>;

    /// Overwrites name and code.
    ///
    /// Returns `Ok(None)` if the country does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new code belongs to another country.
    async fn update(&self, id: i64, update: UpdateCountry) -> Result<Option<Country>, AppError>;

    /// Deletes a country and, by cascade, its states and cities.
    ///
    /// Returns `false` if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts all countries.
    async fn count(&self) -> Result<i64, AppError>;
}
