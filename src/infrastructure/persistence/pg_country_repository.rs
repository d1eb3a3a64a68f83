//! PostgreSQL implementation of country repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Country, NewCountry, UpdateCountry};
use crate::domain::repositories::CountryRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, name, code, created_at";

#[derive(FromRow)]
struct CountryRow {
    id: i64,
    name: String,
    code: String,
    created_at: DateTime<Utc>,
}

impl From<CountryRow> for Country {
    fn from(r: CountryRow) -> Self {
        Country::new(r.id, r.name, r.code, r.created_at)
    }
}

/// PostgreSQL repository for countries.
///
/// Uniqueness of `code` is guaranteed by the `countries_code_key` constraint;
/// deleting a row cascades to `states` and from there to `cities`.
pub struct PgCountryRepository {
    pool: Arc<PgPool>,
}

impl PgCountryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for PgCountryRepository {
    async fn create(&self, new_country: NewCountry) -> Result<Country, AppError> {
        let row = sqlx::query_as::<_, CountryRow>(&format!(
            "INSERT INTO countries (name, code) VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(&new_country.name)
        .bind(&new_country.code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Country>, AppError> {
        let row = sqlx::query_as::<_, CountryRow>(&format!(
            "SELECT {COLUMNS} FROM countries WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Country::from))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Country>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, CountryRow>(&format!(
            "SELECT {COLUMNS} FROM countries WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Country::from).collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Country>, AppError> {
        let row = sqlx::query_as::<_, CountryRow>(&format!(
            "SELECT {COLUMNS} FROM countries WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Country::from))
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM countries WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn list(&self) -> Result<Vec<Country>, AppError> {
        let rows = sqlx::query_as::<_, CountryRow>(&format!(
            "SELECT {COLUMNS} FROM countries ORDER BY name, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Country::from).collect())
    }

    async fn update(&self, id: i64, update: UpdateCountry) -> Result<Option<Country>, AppError> {
        let row = sqlx::query_as::<_, CountryRow>(&format!(
            "UPDATE countries SET name = $2, code = $3 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&update.name)
        .bind(&update.code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Country::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM countries")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
