//! Static fallback dataset, served when the live geodata source is exhausted.
//!
//! The dataset is a YAML file keyed by category:
//!
//! ```yaml
//! facilities:
//!   fire_station:
//!     - name: West Bengal Fire Service HQ
//!       latitude: 22.5579
//!       longitude: 88.3549
//!       phone: "101"
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::facility::{RawFacilityRecord, Tags};
use crate::geo::Coordinate;
use crate::ConfigError;

/// Prefix of ids generated for entries without one; reserved in dataset files.
const GENERATED_ID_PREFIX: &str = "fallback-";

/// One curated facility entry. Only `name` and the coordinate are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FallbackFacility {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
}

impl FallbackFacility {
    /// Minimal entry with just a name and position.
    #[must_use]
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            name: name.to_owned(),
            latitude,
            longitude,
            address: None,
            phone: None,
            website: None,
            opening_hours: None,
        }
    }

    /// Re-expresses the entry in the upstream tag vocabulary so it goes
    /// through the same mapping as live records.
    ///
    /// Entries without an explicit `id` get `fallback-<category>-<index>`.
    #[must_use]
    pub fn to_raw_record(&self, category_key: &str, index: usize) -> RawFacilityRecord {
        let mut tags = Tags::new();
        tags.insert("name".to_owned(), self.name.clone());
        let optional = [
            ("address", &self.address),
            ("phone", &self.phone),
            ("website", &self.website),
            ("opening_hours", &self.opening_hours),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                tags.insert(key.to_owned(), value.clone());
            }
        }

        RawFacilityRecord {
            id: self
                .id
                .clone()
                .unwrap_or_else(|| format!("{GENERATED_ID_PREFIX}{category_key}-{index}")),
            location: Coordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            tags,
        }
    }
}

/// Fallback entries for every category, as loaded from the dataset file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FallbackCatalog {
    #[serde(default)]
    facilities: BTreeMap<String, Vec<FallbackFacility>>,
}

impl FallbackCatalog {
    #[must_use]
    pub fn new(facilities: BTreeMap<String, Vec<FallbackFacility>>) -> Self {
        Self { facilities }
    }

    /// Entries for `category_key`; empty when the dataset has none.
    #[must_use]
    pub fn for_category(&self, category_key: &str) -> &[FallbackFacility] {
        self.facilities
            .get(category_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.facilities.keys().map(String::as_str)
    }
}

/// Load and validate the fallback dataset from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_fallback(path: &Path) -> Result<FallbackCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FallbackFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_fallback(&content)
}

/// Parse and validate fallback YAML already in memory.
///
/// # Errors
///
/// Returns [`ConfigError::FallbackFileParse`] on malformed YAML and
/// [`ConfigError::Validation`] on bad entries.
pub fn parse_fallback(content: &str) -> Result<FallbackCatalog, ConfigError> {
    let catalog: FallbackCatalog =
        serde_yaml::from_str(content).map_err(ConfigError::FallbackFileParse)?;
    validate_fallback(&catalog)?;
    Ok(catalog)
}

fn validate_fallback(catalog: &FallbackCatalog) -> Result<(), ConfigError> {
    for (category, entries) in &catalog.facilities {
        if category.trim().is_empty() {
            return Err(ConfigError::Validation(
                "fallback category key must be non-empty".to_string(),
            ));
        }

        let mut seen_ids = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "fallback entry #{index} in '{category}' has an empty name"
                )));
            }

            Coordinate::new(entry.latitude, entry.longitude).map_err(|e| {
                ConfigError::Validation(format!(
                    "fallback entry '{}' in '{category}': {e}",
                    entry.name
                ))
            })?;

            if let Some(id) = &entry.id {
                if id.starts_with(GENERATED_ID_PREFIX) {
                    return Err(ConfigError::Validation(format!(
                        "fallback id '{id}' in '{category}' uses the reserved '{GENERATED_ID_PREFIX}' prefix"
                    )));
                }
                if !seen_ids.insert(id.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "duplicate fallback id '{id}' in '{category}'"
                    )));
                }
            }
        }
    }

    Ok(())
}
