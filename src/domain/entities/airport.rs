//! Reference data fetched from the airline-sim API.
//!
//! Both collections are immutable for the lifetime of one cache window and
//! are replaced wholesale on refresh. The upstream sends camelCase JSON
//! with a number of extra fields we ignore; fields it sometimes omits
//! default to zero/empty so a sparse record never fails the whole fetch.

use serde::{Deserialize, Serialize};

/// A country and its market-access rating: 0 (closed) to 10 (fully open).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub country_code: String,
    #[serde(default)]
    pub openness: i32,
}

/// An airport record from the bulk `/airports` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub id: u64,
    #[serde(default)]
    pub iata: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub income_level: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airport_deserializes_sparse_record() {
        // Upstream sometimes omits population/income for minor fields.
        let json = r#"{"id": 42, "iata": "XYZ", "countryCode": "US",
                       "latitude": 1.0, "longitude": 2.0, "extra": true}"#;
        let a: Airport = serde_json::from_str(json).unwrap();
        assert_eq!(a.id, 42);
        assert_eq!(a.iata, "XYZ");
        assert_eq!(a.population, 0);
        assert_eq!(a.income_level, 0);
        assert!(a.name.is_empty());
    }

    #[test]
    fn test_country_ignores_unknown_fields() {
        let json = r#"{"countryCode": "DE", "openness": 8, "name": "Germany"}"#;
        let c: Country = serde_json::from_str(json).unwrap();
        assert_eq!(c.country_code, "DE");
        assert_eq!(c.openness, 8);
    }
}
