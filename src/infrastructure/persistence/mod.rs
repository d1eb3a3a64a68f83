//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgCountryRepository`] - Country storage and code lookup
//! - [`PgStateRepository`] - State storage, scoped code lookup
//! - [`PgCityRepository`] - City storage and hierarchy listings

pub mod pg_city_repository;
pub mod pg_country_repository;
pub mod pg_state_repository;

pub use pg_city_repository::PgCityRepository;
pub use pg_country_repository::PgCountryRepository;
pub use pg_state_repository::PgStateRepository;
