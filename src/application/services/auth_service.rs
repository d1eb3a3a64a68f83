//! Authentication service issuing and validating JWT bearer tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;

/// JWT signing settings, built once from [`crate::config::Config`] at startup.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiration_minutes: i64,
}

/// Claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Username the token was issued to.
    pub sub: String,
    /// Unique token id.
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly issued token and its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Service for logging in and authenticating API requests.
///
/// There is no user store: any non-blank username/password pair receives an
/// HS256-signed token valid for `expiration_minutes`.
pub struct AuthService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Exchanges credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if username or password is blank.
    /// Returns [`AppError::Internal`] if signing fails.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AppError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            tracing::warn!("Login attempt with empty username or password");
            return Err(AppError::unauthorized(
                "Username and password are required",
                json!({}),
            ));
        }

        let issued = self.issue_token(username)?;
        tracing::info!(username, "Login successful");

        Ok(issued)
    }

    /// Signs a token for `username` without checking credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the expiry is out of range or signing fails.
    pub fn issue_token(&self, username: &str) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = Duration::try_minutes(self.config.expiration_minutes)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                tracing::error!(
                    minutes = self.config.expiration_minutes,
                    "Token lifetime out of range"
                );
                AppError::internal("Failed to generate token", json!({}))
            })?;

        let claims = Claims {
            sub: username.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to sign token");
                AppError::internal("Failed to generate token", json!({}))
            })?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Validates a raw bearer token and returns its claims.
    ///
    /// Signature, issuer, audience and expiry are all checked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid or expired.
    pub fn authenticate(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation.set_audience(&[self.config.audience.as_str()]);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected bearer token");
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Invalid or expired token"}),
                )
            })
    }
}
