//! DTOs for country endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;
use crate::domain::entities::Country;

/// Body of `POST /api/countries` and `PUT /api/countries/{id}`.
///
/// The code is normalized (trimmed, upper-cased) by the service, which also
/// enforces its exact length.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CountryRequest {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    pub code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryItem {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl From<Country> for CountryItem {
    fn from(c: Country) -> Self {
        Self {
            id: c.id,
            name: c.name,
            code: c.code,
            created_at: c.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_request_validation() {
        let ok = CountryRequest {
            name: "United States".to_string(),
            code: "usa".to_string(),
        };
        assert!(ok.validate().is_ok());

        let blank_name = CountryRequest {
            name: "   ".to_string(),
            code: "USA".to_string(),
        };
        assert!(blank_name.validate().is_err());

        let long_name = CountryRequest {
            name: "x".repeat(101),
            code: "USA".to_string(),
        };
        assert!(long_name.validate().is_err());
    }

    #[test]
    fn test_country_item_is_camel_case() {
        let item = CountryItem::from(Country::new(
            1,
            "Brazil".to_string(),
            "BRA".to_string(),
            Utc::now(),
        ));
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["code"], "BRA");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
