//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, CityService, CountryService, JwtConfig, StateService,
};
use crate::infrastructure::persistence::{
    PgCityRepository, PgCountryRepository, PgStateRepository,
};

pub type AppCountryService = CountryService<PgCountryRepository>;
pub type AppStateService = StateService<PgStateRepository, PgCountryRepository>;
pub type AppCityService = CityService<PgCityRepository, PgStateRepository, PgCountryRepository>;

/// Services shared by every request.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub country_service: Arc<AppCountryService>,
    pub state_service: Arc<AppStateService>,
    pub city_service: Arc<AppCityService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires PostgreSQL repositories into the services.
    pub fn new(pool: Arc<PgPool>, jwt: JwtConfig) -> Self {
        let country_repository = Arc::new(PgCountryRepository::new(pool.clone()));
        let state_repository = Arc::new(PgStateRepository::new(pool.clone()));
        let city_repository = Arc::new(PgCityRepository::new(pool));

        Self {
            country_service: Arc::new(CountryService::new(country_repository.clone())),
            state_service: Arc::new(StateService::new(
                state_repository.clone(),
                country_repository.clone(),
            )),
            city_service: Arc::new(CityService::new(
                city_repository,
                state_repository,
                country_repository,
            )),
            auth_service: Arc::new(AuthService::new(jwt)),
        }
    }
}
