//! PostgreSQL implementation of city repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{City, NewCity, UpdateCity};
use crate::domain::repositories::CityRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, name, state_id, population, created_at";

#[derive(FromRow)]
struct CityRow {
    id: i64,
    name: String,
    state_id: i64,
    population: Option<i64>,
    created_at: DateTime<Utc>,
}

impl From<CityRow> for City {
    fn from(r: CityRow) -> Self {
        City::new(r.id, r.name, r.state_id, r.population, r.created_at)
    }
}

/// PostgreSQL repository for cities.
pub struct PgCityRepository {
    pool: Arc<PgPool>,
}

impl PgCityRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for PgCityRepository {
    async fn create(&self, new_city: NewCity) -> Result<City, AppError> {
        let row = sqlx::query_as::<_, CityRow>(&format!(
            "INSERT INTO cities (name, state_id, population) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        ))
        .bind(&new_city.name)
        .bind(new_city.state_id)
        .bind(new_city.population)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<City>, AppError> {
        let row =
            sqlx::query_as::<_, CityRow>(&format!("SELECT {COLUMNS} FROM cities WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(City::from))
    }

    async fn list(&self) -> Result<Vec<City>, AppError> {
        let rows = sqlx::query_as::<_, CityRow>(&format!(
            "SELECT {COLUMNS} FROM cities ORDER BY name, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(City::from).collect())
    }

    async fn list_by_state(&self, state_id: i64) -> Result<Vec<City>, AppError> {
        let rows = sqlx::query_as::<_, CityRow>(&format!(
            "SELECT {COLUMNS} FROM cities WHERE state_id = $1 ORDER BY name, id"
        ))
        .bind(state_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(City::from).collect())
    }

    async fn list_by_country(&self, country_id: i64) -> Result<Vec<City>, AppError> {
        let rows = sqlx::query_as::<_, CityRow>(
            r#"
            SELECT c.id, c.name, c.state_id, c.population, c.created_at
            FROM cities c
            JOIN states s ON s.id = c.state_id
            WHERE s.country_id = $1
            ORDER BY c.name, c.id
            "#,
        )
        .bind(country_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(City::from).collect())
    }

    async fn update(&self, id: i64, update: UpdateCity) -> Result<Option<City>, AppError> {
        let row = sqlx::query_as::<_, CityRow>(&format!(
            r#"
            UPDATE cities SET
                name       = $2,
                state_id   = $3,
                population = $4
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&update.name)
        .bind(update.state_id)
        .bind(update.population)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(City::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cities")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
