//! Core domain entities of the geographic hierarchy.
//!
//! Entities are plain data structures. Ownership is expressed by foreign key
//! ids only (`State::country_id`, `City::state_id`); parents are looked up on
//! demand and children are found with filtered queries.
//!
//! # Entity Types
//!
//! - [`Country`] - Root of the hierarchy, globally unique 3-character code
//! - [`State`] - Owned by a country, code unique within that country
//! - [`City`] - Owned by a state, no children
//!
//! # Design Pattern
//!
//! - `NewCountry`, `NewState`, `NewCity` - For creating new records
//! - `UpdateCountry`, `UpdateState`, `UpdateCity` - Full replacement on update
//! - `StateDetails`, `CityDetails` - Entities with parent names attached for responses

pub mod city;
pub mod country;
pub mod state;

pub use city::{City, CityDetails, NewCity, UpdateCity};
pub use country::{COUNTRY_CODE_LEN, Country, NewCountry, UpdateCountry, normalize_country_code};
pub use state::{NewState, State, StateDetails, UpdateState};
