//! Facility categories and the upstream tag clauses they map to.
//!
//! A category ORs one or more `key=value` clauses in the upstream query.
//! Police is the odd one out: stations are tagged either `amenity=police` or
//! `office=police`, so it carries two clauses.

use serde::Serialize;

use crate::CoreError;

/// One `["key"="value"]` tag filter in an upstream query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagClause {
    pub key: String,
    pub value: String,
}

impl TagClause {
    #[must_use]
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }
}

impl std::fmt::Display for TagClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[\"{}\"=\"{}\"]", self.key, self.value)
    }
}

/// A kind of emergency facility, e.g. police or hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityCategory {
    /// Stable identifier used on the command line and in the fallback dataset.
    pub key: String,
    /// Name given to facilities whose upstream record has no usable name.
    pub default_label: String,
    clauses: Vec<TagClause>,
}

impl FacilityCategory {
    /// Defines a category. Callers may add categories beyond the built-ins.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyClauses`] if `clauses` is empty, since such a
    /// category could never match anything upstream.
    pub fn new(
        key: &str,
        default_label: &str,
        clauses: Vec<TagClause>,
    ) -> Result<Self, CoreError> {
        if clauses.is_empty() {
            return Err(CoreError::EmptyClauses(key.to_owned()));
        }
        Ok(Self {
            key: key.to_owned(),
            default_label: default_label.to_owned(),
            clauses,
        })
    }

    fn builtin(key: &str, default_label: &str, clauses: &[(&str, &str)]) -> Self {
        Self {
            key: key.to_owned(),
            default_label: default_label.to_owned(),
            clauses: clauses.iter().map(|(k, v)| TagClause::new(k, v)).collect(),
        }
    }

    #[must_use]
    pub fn police() -> Self {
        Self::builtin(
            "police",
            "Police Station",
            &[("amenity", "police"), ("office", "police")],
        )
    }

    #[must_use]
    pub fn fire_station() -> Self {
        Self::builtin("fire_station", "Fire Station", &[("amenity", "fire_station")])
    }

    #[must_use]
    pub fn hospital() -> Self {
        Self::builtin("hospital", "Hospital", &[("amenity", "hospital")])
    }

    #[must_use]
    pub fn doctors() -> Self {
        Self::builtin("doctors", "Doctor", &[("amenity", "doctors")])
    }

    #[must_use]
    pub fn ambulance() -> Self {
        Self::builtin(
            "ambulance",
            "Ambulance Service",
            &[("emergency", "ambulance_station")],
        )
    }

    /// All built-in categories, in display order.
    #[must_use]
    pub fn all_builtin() -> Vec<Self> {
        vec![
            Self::police(),
            Self::fire_station(),
            Self::ambulance(),
            Self::hospital(),
            Self::doctors(),
        ]
    }

    /// Looks up a built-in category by key (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownCategory`] if no built-in category matches.
    pub fn from_key(key: &str) -> Result<Self, CoreError> {
        let wanted = key.trim().to_ascii_lowercase();
        Self::all_builtin()
            .into_iter()
            .find(|c| c.key == wanted)
            .ok_or_else(|| CoreError::UnknownCategory(key.to_owned()))
    }

    #[must_use]
    pub fn clauses(&self) -> &[TagClause] {
        &self.clauses
    }
}
