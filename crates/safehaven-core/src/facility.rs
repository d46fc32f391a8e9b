//! Raw upstream records and the caller-facing facility types.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::geo::Coordinate;

/// Loosely-typed tag dictionary as delivered by the geodata source.
pub type Tags = BTreeMap<String, String>;

/// A facility record before mapping: only `id` and `location` are guaranteed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFacilityRecord {
    pub id: String,
    pub location: Coordinate,
    pub tags: Tags,
}

/// A resolved facility, annotated with its distance from the query origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    pub address: String,
    /// Always populated. `0.0` is a placeholder only when no origin was known.
    pub distance_km: f64,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    /// `None` means unknown, not closed.
    pub open_now: Option<bool>,
}

/// Outcome of one resolution call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionResult {
    pub facilities: Vec<Facility>,
    /// `true` when the facilities came from the static fallback dataset.
    pub used_fallback: bool,
    pub radius_used_m: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_open_state_serializes_as_null() {
        let result = ResolutionResult {
            facilities: vec![Facility {
                id: "42".to_owned(),
                name: "SSKM Hospital".to_owned(),
                location: Coordinate {
                    latitude: 22.5393,
                    longitude: 88.3437,
                },
                address: "244 AJC Bose Road".to_owned(),
                distance_km: 3.7,
                phone_number: None,
                website: None,
                open_now: None,
            }],
            used_fallback: true,
            radius_used_m: 50_000,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["used_fallback"], true);
        assert_eq!(value["radius_used_m"], 50_000);
        let facility = &value["facilities"][0];
        assert_eq!(facility["name"], "SSKM Hospital");
        assert!(facility["open_now"].is_null());
        assert_eq!(facility["location"]["latitude"], 22.5393);
    }
}
