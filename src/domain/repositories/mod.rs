//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CountryRepository`] - Country CRUD and code lookup
//! - [`StateRepository`] - State CRUD, per-country listing and scoped code lookup
//! - [`CityRepository`] - City CRUD and per-state / per-country listing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod city_repository;
pub mod country_repository;
pub mod state_repository;

pub use city_repository::CityRepository;
pub use country_repository::CountryRepository;
pub use state_repository::StateRepository;

#[cfg(test)]
pub use city_repository::MockCityRepository;
#[cfg(test)]
pub use country_repository::MockCountryRepository;
#[cfg(test)]
pub use state_repository::MockStateRepository;
