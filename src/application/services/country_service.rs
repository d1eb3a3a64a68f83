//! Country management service.

use crate::domain::entities::{
    COUNTRY_CODE_LEN, Country, NewCountry, UpdateCountry, normalize_country_code,
};
use crate::domain::repositories::CountryRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing countries.
///
/// Enforces:
/// - Codes are trimmed, upper-cased and exactly 3 characters long
/// - Codes are globally unique (the database constraint is the final guard)
pub struct CountryService<R: CountryRepository> {
    repository: Arc<R>,
}

impl<R: CountryRepository> CountryService<R> {
    /// Creates a new country service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all countries ordered by name.
    pub async fn list_countries(&self) -> Result<Vec<Country>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a country by id, `None` if absent.
    pub async fn find_country(&self, id: i64) -> Result<Option<Country>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Creates a new country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the normalized code is not 3 characters.
    /// Returns [`AppError::Conflict`] if another country already uses the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_country(&self, name: String, code: String) -> Result<Country, AppError> {
        let code = normalized_code(&code)?;

        if self.repository.find_by_code(&code).await?.is_some() {
            tracing::debug!(%code, "Rejected duplicate country code");
            return Err(duplicate_code(&code));
        }

        let created = self.repository.create(NewCountry { name, code }).await?;
        tracing::info!(id = created.id, code = %created.code, "Country created");

        Ok(created)
    }

    /// Replaces a country's name and code.
    ///
    /// Re-submitting the country's own code is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the country does not exist.
    /// Returns [`AppError::Validation`] if the normalized code is not 3 characters.
    /// Returns [`AppError::Conflict`] if a different country already uses the code.
    pub async fn update_country(
        &self,
        id: i64,
        name: String,
        code: String,
    ) -> Result<Country, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(country_not_found(id));
        }

        let code = normalized_code(&code)?;

        if let Some(existing) = self.repository.find_by_code(&code).await?
            && existing.id != id
        {
            tracing::debug!(%code, owner = existing.id, "Rejected duplicate country code");
            return Err(duplicate_code(&code));
        }

        let updated = self
            .repository
            .update(id, UpdateCountry { name, code })
            .await?
            .ok_or_else(|| country_not_found(id))?;

        tracing::info!(id, code = %updated.code, "Country updated");
        Ok(updated)
    }

    /// Deletes a country together with its states and cities.
    ///
    /// Returns `false` if the country did not exist.
    pub async fn delete_country(&self, id: i64) -> Result<bool, AppError> {
        let deleted = self.repository.delete(id).await?;

        if deleted {
            tracing::info!(id, "Country deleted");
        }

        Ok(deleted)
    }

    /// Counts all countries.
    pub async fn count_countries(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn normalized_code(code: &str) -> Result<String, AppError> {
    normalize_country_code(code).ok_or_else(|| {
        AppError::bad_request(
            format!("Country code must be exactly {COUNTRY_CODE_LEN} characters."),
            json!({ "code": code }),
        )
    })
}

fn duplicate_code(code: &str) -> AppError {
    AppError::conflict(
        format!("Country with code '{code}' already exists."),
        json!({ "code": code }),
    )
}

fn country_not_found(id: i64) -> AppError {
    AppError::not_found("Country not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCountryRepository;
    use chrono::Utc;

    fn create_test_country(id: i64, name: &str, code: &str) -> Country {
        Country::new(id, name.to_string(), code.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_create_country_success() {
        let mut mock_repo = MockCountryRepository::new();

        mock_repo
            .expect_find_by_code()
            .withf(|code| code.to_string() == "USA")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .withf(|new| new.name == "United States" && new.code == "USA")
            .times(1)
            .returning(|new| Ok(create_test_country(1, &new.name, &new.code)));

        let service = CountryService::new(Arc::new(mock_repo));

        let result = service
            .create_country("United States".to_string(), "usa".to_string())
            .await;

        let country = result.unwrap();
        assert_eq!(country.id, 1);
        assert_eq!(country.code, "USA");
    }

    #[tokio::test]
    async fn test_create_country_duplicate_code() {
        let mut mock_repo = MockCountryRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(Some(create_test_country(1, "Duplicate", "DUP"))));

        mock_repo.expect_create().never();

        let service = CountryService::new(Arc::new(mock_repo));

        let result = service
            .create_country("Another".to_string(), " dup ".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_country_invalid_code_length() {
        let mut mock_repo = MockCountryRepository::new();
        mock_repo.expect_find_by_code().never();
        mock_repo.expect_create().never();

        let service = CountryService::new(Arc::new(mock_repo));

        let result = service
            .create_country("United States".to_string(), "US".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_country_not_found() {
        let mut mock_repo = MockCountryRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo.expect_update().never();

        let service = CountryService::new(Arc::new(mock_repo));

        let result = service
            .update_country(99, "Nowhere".to_string(), "NWH".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_country_keeps_own_code() {
        let mut mock_repo = MockCountryRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(create_test_country(id, "United States", "USA"))));

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(Some(create_test_country(1, "United States", "USA"))));

        mock_repo
            .expect_update()
            .withf(|id, update| *id == 1 && update.name == "United States of America")
            .times(1)
            .returning(|id, update| Ok(Some(create_test_country(id, &update.name, &update.code))));

        let service = CountryService::new(Arc::new(mock_repo));

        let result = service
            .update_country(1, "United States of America".to_string(), "USA".to_string())
            .await;

        assert_eq!(result.unwrap().name, "United States of America");
    }

    #[tokio::test]
    async fn test_update_country_code_taken_by_other() {
        let mut mock_repo = MockCountryRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(create_test_country(id, "Canada", "CAN"))));

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(Some(create_test_country(1, "United States", "USA"))));

        mock_repo.expect_update().never();

        let service = CountryService::new(Arc::new(mock_repo));

        let result = service
            .update_country(2, "Canada".to_string(), "usa".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_delete_country_absent_returns_false() {
        let mut mock_repo = MockCountryRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = CountryService::new(Arc::new(mock_repo));

        assert!(!service.delete_country(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_country_success() {
        let mut mock_repo = MockCountryRepository::new();

        mock_repo
            .expect_delete()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(true));

        let service = CountryService::new(Arc::new(mock_repo));

        assert!(service.delete_country(1).await.unwrap());
    }
}
