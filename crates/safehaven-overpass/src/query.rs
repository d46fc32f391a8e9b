//! Overpass QL construction for radius lookups.

use safehaven_core::{Coordinate, TagClause};

/// Builds an Overpass QL query returning every node that matches any of
/// `clauses` within `radius_m` metres of `origin`.
///
/// Each clause becomes its own `node(around:...)` statement inside one union,
/// so multi-clause categories are ORed:
///
/// ```text
/// [out:json];(node(around:10000,22.5726,88.3639)["amenity"="police"];node(around:10000,22.5726,88.3639)["office"="police"];);out body;
/// ```
#[must_use]
pub fn build_query(origin: Coordinate, clauses: &[TagClause], radius_m: u32) -> String {
    let around = format!(
        "node(around:{radius_m},{},{})",
        origin.latitude, origin.longitude
    );
    let statements: String = clauses
        .iter()
        .map(|clause| format!("{around}{clause};"))
        .collect();
    format!("[out:json];({statements});out body;")
}
