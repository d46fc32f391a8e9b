//! Nearby emergency-facility resolution.
//!
//! [`FacilityResolver`] queries the live geodata source and degrades to a
//! wider radius, then to a static fallback dataset, so callers always get a
//! distance-sorted list back.

pub mod mapping;
pub mod resolver;

pub use mapping::{build_address, first_tag, to_facility, ADDRESS_PLACEHOLDER};
pub use resolver::{fallback_result, FacilityResolver, DEFAULT_RADIUS_CEILING_M};
