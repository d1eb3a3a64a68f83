//! DTOs for the login endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login credentials.
///
/// Missing fields deserialize as empty strings and are rejected by the
/// service with 401.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
