//! Application layer containing business logic services.
//!
//! Services orchestrate domain operations and enforce business rules.
//! They depend on repository traits (not concrete implementations),
//! enabling testability through dependency injection.
//!
//! # Services
//!
//! - [`services::CountryService`] - Country code normalization and uniqueness
//! - [`services::StateService`] - Parent country checks and per-country code uniqueness
//! - [`services::CityService`] - Parent state checks and city → state → country shaping
//! - [`services::AuthService`] - JWT issuance and validation

pub mod services;
