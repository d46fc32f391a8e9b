//! Overpass API response types.
//!
//! Only the subset used for node lookups is modelled. The interpreter returns
//! `{"version": ..., "elements": [...]}`; a missing or `null` `elements`
//! array is read as zero results.

use serde::{Deserialize, Deserializer};

use safehaven_core::{Coordinate, RawFacilityRecord, Tags};

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub elements: Vec<OverpassElement>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<OverpassElement>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<OverpassElement>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One element of an `out body;` result.
#[derive(Debug, Deserialize)]
pub struct OverpassElement {
    pub id: i64,
    /// Present on nodes; ways and relations only carry it with `out center;`.
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: Option<Tags>,
}

impl OverpassElement {
    /// Converts the element into a [`RawFacilityRecord`].
    ///
    /// Returns `None` for elements without a valid position.
    #[must_use]
    pub fn into_record(self) -> Option<RawFacilityRecord> {
        let location = Coordinate::new(self.lat?, self.lon?).ok()?;
        Some(RawFacilityRecord {
            id: self.id.to_string(),
            location,
            tags: self.tags.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_elements_is_empty() {
        let parsed: OverpassResponse =
            serde_json::from_str(r#"{"version": 0.6, "generator": "Overpass API"}"#).unwrap();
        assert!(parsed.elements.is_empty());
    }

    #[test]
    fn null_elements_is_empty() {
        let parsed: OverpassResponse =
            serde_json::from_str(r#"{"version": 0.6, "elements": null}"#).unwrap();
        assert!(parsed.elements.is_empty());
    }

    #[test]
    fn element_without_tags_maps_to_empty_tags() {
        let element: OverpassElement =
            serde_json::from_str(r#"{"type": "node", "id": 42, "lat": 1.5, "lon": 2.5}"#).unwrap();
        let record = element.into_record().unwrap();
        assert_eq!(record.id, "42");
        assert!(record.tags.is_empty());
        assert!((record.location.longitude - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn element_without_position_is_skipped() {
        let element: OverpassElement =
            serde_json::from_str(r#"{"type": "way", "id": 7, "tags": {"name": "x"}}"#).unwrap();
        assert!(element.into_record().is_none());
    }

    #[test]
    fn element_with_out_of_range_position_is_skipped() {
        let element: OverpassElement =
            serde_json::from_str(r#"{"id": 8, "lat": 95.0, "lon": 2.0}"#).unwrap();
        assert!(element.into_record().is_none());
    }
}
