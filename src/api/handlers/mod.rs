//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod cities;
pub mod countries;
pub mod health;
pub mod states;

pub use auth::login_handler;
pub use cities::{
    create_city_handler, delete_city_handler, get_city_handler, list_cities_by_country_handler,
    list_cities_by_state_handler, list_cities_handler, update_city_handler,
};
pub use countries::{
    create_country_handler, delete_country_handler, get_country_handler, list_countries_handler,
    update_country_handler,
};
pub use health::health_handler;
pub use states::{
    create_state_handler, delete_state_handler, get_state_handler, list_states_by_country_handler,
    list_states_handler, update_state_handler,
};
