//! Domain entity representing a country, the root of the hierarchy.

use chrono::{DateTime, Utc};

/// Required length of a country code after normalization.
pub const COUNTRY_CODE_LEN: usize = 3;

/// A country owning zero or more states.
///
/// `code` is stored trimmed and upper-cased and is globally unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl Country {
    pub fn new(id: i64, name: String, code: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            code,
            created_at,
        }
    }
}

/// Input data for creating a new country.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCountry {
    pub name: String,
    pub code: String,
}

/// Full replacement of a country's mutable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCountry {
    pub name: String,
    pub code: String,
}

/// Trims and upper-cases a country code.
///
/// Returns `None` unless the result is exactly [`COUNTRY_CODE_LEN`] characters.
pub fn normalize_country_code(code: &str) -> Option<String> {
    let normalized = code.trim().to_uppercase();

    if normalized.chars().count() == COUNTRY_CODE_LEN {
        Some(normalized)
    } else {
        None
    }
}
