//! Business logic services.
//!
//! Services enforce the referential and uniqueness invariants of the hierarchy
//! and shape entities into their denormalized views.

pub mod auth_service;
pub mod city_service;
pub mod country_service;
pub mod state_service;

pub use auth_service::{AuthService, Claims, IssuedToken, JwtConfig};
pub use city_service::CityService;
pub use country_service::CountryService;
pub use state_service::StateService;
