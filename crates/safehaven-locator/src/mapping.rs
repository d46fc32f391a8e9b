//! Mapping of loosely-typed tag dictionaries onto [`Facility`] fields.
//!
//! Every field is read through an ordered chain of candidate keys; the first
//! key holding a non-blank value wins.

use safehaven_core::{
    haversine_km, Coordinate, Facility, FacilityCategory, RawFacilityRecord, Tags,
};

pub const ADDRESS_PLACEHOLDER: &str = "Address not available";

const NAME_KEYS: &[&str] = &["name"];
const PHONE_KEYS: &[&str] = &["phone", "contact:phone"];
const WEBSITE_KEYS: &[&str] = &["website"];
const OPENING_HOURS_KEY: &str = "opening_hours";

/// Structured address parts, in output order.
const ADDRESS_PART_KEYS: &[&str] = &[
    "addr:housenumber",
    "addr:street",
    "addr:city",
    "addr:postcode",
];
const FREE_TEXT_ADDRESS_KEYS: &[&str] = &["address"];

/// Returns the trimmed value of the first key in `keys` with a non-blank value.
#[must_use]
pub fn first_tag<'a>(tags: &'a Tags, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| tags.get(*key))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}

/// Best-effort postal address.
///
/// Structured `addr:*` parts joined with `", "`, else the free-text
/// `address` tag, else `"<name> location"` when the record is named, else
/// [`ADDRESS_PLACEHOLDER`].
#[must_use]
pub fn build_address(tags: &Tags) -> String {
    let parts: Vec<&str> = ADDRESS_PART_KEYS
        .iter()
        .filter_map(|key| first_tag(tags, &[*key]))
        .collect();
    if !parts.is_empty() {
        return parts.join(", ");
    }

    if let Some(address) = first_tag(tags, FREE_TEXT_ADDRESS_KEYS) {
        return address.to_owned();
    }

    match first_tag(tags, NAME_KEYS) {
        Some(name) => format!("{name} location"),
        None => ADDRESS_PLACEHOLDER.to_owned(),
    }
}

/// Maps a raw record to a [`Facility`].
///
/// With an `origin` the distance is the haversine distance to it; without
/// one the distance is the `0.0` placeholder.
#[must_use]
pub fn to_facility(
    record: RawFacilityRecord,
    category: &FacilityCategory,
    origin: Option<Coordinate>,
) -> Facility {
    let tags = &record.tags;
    let name = first_tag(tags, NAME_KEYS)
        .map_or_else(|| category.default_label.clone(), str::to_owned);
    let address = build_address(tags);
    let phone_number = first_tag(tags, PHONE_KEYS).map(str::to_owned);
    let website = first_tag(tags, WEBSITE_KEYS).map(str::to_owned);
    // Presence alone counts as open; the schedule grammar is not evaluated.
    let open_now = tags.contains_key(OPENING_HOURS_KEY).then_some(true);
    let distance_km = origin.map_or(0.0, |origin| haversine_km(origin, record.location));

    Facility {
        id: record.id,
        name,
        location: record.location,
        address,
        distance_km,
        phone_number,
        website,
        open_now,
    }
}
