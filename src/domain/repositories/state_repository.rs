//! Repository trait for state storage.

use crate::domain::entities::{NewState, State, UpdateState};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for states.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStateRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Inserts a new state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `(code, country_id)` is already taken.
    /// Returns [`AppError::InvalidReference`] if the country no longer exists.
    async fn create(&self, new_state: NewState) -> Result<State, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<State>, AppError>;

    /// Finds all states whose id is in `ids`. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<State>, AppError>;

    /// Finds the state with this code inside the given country.
    async fn find_by_code(&self, code: &str, country_id: i64)
    -> Result<Option<State>, AppError>;

    /// Lists all states ordered by name.
    async fn list(&self) -> Result<Vec<State>, AppError>;

    /// Lists the states of one country ordered by name.
    async fn list_by_country(&self, country_id: i64) -> Result<Vec<State>, AppError>;

    /// Overwrites name, code and parent country.
    ///
    /// Returns `Ok(None)` if the state does not exist.
    async fn update(&self, id: i64, update: UpdateState) -> Result<Option<State>, AppError>;

    /// Deletes a state and, by cascade, its cities.
    ///
    /// Returns `false` if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
