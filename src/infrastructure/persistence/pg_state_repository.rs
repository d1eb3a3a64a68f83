//! PostgreSQL implementation of state repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewState, State, UpdateState};
use crate::domain::repositories::StateRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, name, code, country_id, created_at";

#[derive(FromRow)]
struct StateRow {
    id: i64,
    name: String,
    code: String,
    country_id: i64,
    created_at: DateTime<Utc>,
}

impl From<StateRow> for State {
    fn from(r: StateRow) -> Self {
        State::new(r.id, r.name, r.code, r.country_id, r.created_at)
    }
}

/// PostgreSQL repository for states.
///
/// `(code, country_id)` is unique via `states_code_country_id_key`; the
/// `country_id` foreign key rejects writes pointing at a missing country.
pub struct PgStateRepository {
    pool: Arc<PgPool>,
}

impl PgStateRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StateRepository for PgStateRepository {
    async fn create(&self, new_state: NewState) -> Result<State, AppError> {
        let row = sqlx::query_as::<_, StateRow>(&format!(
            "INSERT INTO states (name, code, country_id) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        ))
        .bind(&new_state.name)
        .bind(&new_state.code)
        .bind(new_state.country_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<State>, AppError> {
        let row =
            sqlx::query_as::<_, StateRow>(&format!("SELECT {COLUMNS} FROM states WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(State::from))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<State>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, StateRow>(&format!(
            "SELECT {COLUMNS} FROM states WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(State::from).collect())
    }

    async fn find_by_code(
        &self,
        code: &str,
        country_id: i64,
    ) -> Result<Option<State>, AppError> {
        let row = sqlx::query_as::<_, StateRow>(&format!(
            "SELECT {COLUMNS} FROM states WHERE code = $1 AND country_id = $2"
        ))
        .bind(code)
        .bind(country_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(State::from))
    }

    async fn list(&self) -> Result<Vec<State>, AppError> {
        let rows = sqlx::query_as::<_, StateRow>(&format!(
            "SELECT {COLUMNS} FROM states ORDER BY name, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(State::from).collect())
    }

    async fn list_by_country(&self, country_id: i64) -> Result<Vec<State>, AppError> {
        let rows = sqlx::query_as::<_, StateRow>(&format!(
            "SELECT {COLUMNS} FROM states WHERE country_id = $1 ORDER BY name, id"
        ))
        .bind(country_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(State::from).collect())
    }

    async fn update(&self, id: i64, update: UpdateState) -> Result<Option<State>, AppError> {
        let row = sqlx::query_as::<_, StateRow>(&format!(
            r#"
            UPDATE states SET
                name       = $2,
                code       = $3,
                country_id = $4
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&update.name)
        .bind(&update.code)
        .bind(update.country_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(State::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM states WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM states")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
