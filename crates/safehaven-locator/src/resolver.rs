//! Live lookup with radius escalation and static fallback.
//!
//! Degradation policy for one [`FacilityResolver::resolve`] call:
//!
//! | live query outcome             | next step                          |
//! |--------------------------------|------------------------------------|
//! | ≥1 record                      | return live results                |
//! | 0 records, radius < ceiling    | query once more at the ceiling     |
//! | 0 records, radius ≥ ceiling    | serve the fallback set             |
//! | transport/status/decode error  | serve the fallback set, no retry   |

use safehaven_core::{
    Coordinate, Facility, FacilityCategory, FallbackFacility, RawFacilityRecord, ResolutionResult,
};
use safehaven_overpass::OverpassClient;

use crate::mapping::to_facility;

/// Radius the resolver escalates to when a smaller search comes back empty.
pub const DEFAULT_RADIUS_CEILING_M: u32 = 50_000;

/// Result of one live query, with every failure folded into `Failed`.
enum LiveOutcome {
    Found(Vec<RawFacilityRecord>),
    Empty,
    Failed,
}

/// Resolves nearby facilities for a category around an origin.
///
/// Holds no per-call state; concurrent calls are fully independent and are
/// not deduplicated.
#[derive(Debug, Clone)]
pub struct FacilityResolver {
    client: OverpassClient,
    radius_ceiling_m: u32,
}

impl FacilityResolver {
    #[must_use]
    pub fn new(client: OverpassClient) -> Self {
        Self {
            client,
            radius_ceiling_m: DEFAULT_RADIUS_CEILING_M,
        }
    }

    #[must_use]
    pub fn with_radius_ceiling(mut self, radius_ceiling_m: u32) -> Self {
        self.radius_ceiling_m = radius_ceiling_m;
        self
    }

    #[must_use]
    pub fn radius_ceiling_m(&self) -> u32 {
        self.radius_ceiling_m
    }

    /// Returns facilities of `category` near `origin`, nearest first.
    ///
    /// Never fails: upstream errors and exhausted searches end in the
    /// `fallback` set, flagged with `used_fallback`. An empty fallback set
    /// yields an empty list.
    pub async fn resolve(
        &self,
        origin: Coordinate,
        category: &FacilityCategory,
        mut radius_m: u32,
        fallback: &[FallbackFacility],
    ) -> ResolutionResult {
        loop {
            match self.query_live(origin, category, radius_m).await {
                LiveOutcome::Found(records) => {
                    tracing::debug!(
                        category = %category.key,
                        radius_m,
                        count = records.len(),
                        "live facility lookup succeeded"
                    );
                    let facilities = records
                        .into_iter()
                        .map(|record| to_facility(record, category, Some(origin)))
                        .collect();
                    return ResolutionResult {
                        facilities: sorted_by_distance(facilities),
                        used_fallback: false,
                        radius_used_m: radius_m,
                    };
                }
                // Single jump straight to the ceiling; the second pass cannot
                // take this arm again because radius_m == ceiling.
                LiveOutcome::Empty if radius_m < self.radius_ceiling_m => {
                    tracing::info!(
                        category = %category.key,
                        radius_m,
                        ceiling_m = self.radius_ceiling_m,
                        "no facilities in radius; escalating to ceiling"
                    );
                    radius_m = self.radius_ceiling_m;
                }
                LiveOutcome::Empty | LiveOutcome::Failed => {
                    return fallback_result(category, fallback, Some(origin), radius_m);
                }
            }
        }
    }

    async fn query_live(
        &self,
        origin: Coordinate,
        category: &FacilityCategory,
        radius_m: u32,
    ) -> LiveOutcome {
        match self
            .client
            .fetch_nodes(origin, category.clauses(), radius_m)
            .await
        {
            Ok(records) if records.is_empty() => LiveOutcome::Empty,
            Ok(records) => LiveOutcome::Found(records),
            Err(e) => {
                tracing::warn!(
                    category = %category.key,
                    radius_m,
                    error = %e,
                    "live facility lookup failed; using fallback data"
                );
                LiveOutcome::Failed
            }
        }
    }
}

/// Builds the fallback result for `category` without touching the network.
///
/// With an `origin`, distances are computed against it and the list is sorted
/// nearest first. Without one, every facility carries the `0.0` placeholder
/// distance and dataset order is kept.
#[must_use]
pub fn fallback_result(
    category: &FacilityCategory,
    fallback: &[FallbackFacility],
    origin: Option<Coordinate>,
    radius_m: u32,
) -> ResolutionResult {
    tracing::info!(
        category = %category.key,
        count = fallback.len(),
        origin_known = origin.is_some(),
        "serving fallback facilities"
    );

    let facilities: Vec<Facility> = fallback
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            to_facility(entry.to_raw_record(&category.key, index), category, origin)
        })
        .collect();

    ResolutionResult {
        facilities: if origin.is_some() {
            sorted_by_distance(facilities)
        } else {
            facilities
        },
        used_fallback: true,
        radius_used_m: radius_m,
    }
}

fn sorted_by_distance(mut facilities: Vec<Facility>) -> Vec<Facility> {
    facilities.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    facilities
}
