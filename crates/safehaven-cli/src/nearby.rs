//! `nearby` and `categories` command handlers.

use futures::future::join_all;
use safehaven_core::{
    load_fallback, AppConfig, ConfigError, Coordinate, Facility, FacilityCategory,
    FallbackCatalog, ResolutionResult,
};
use safehaven_locator::{fallback_result, FacilityResolver};
use safehaven_overpass::OverpassClient;

/// Resolve facilities for one category (or every built-in one) and print them.
///
/// Without an origin nothing is queried: the fallback dataset is printed in
/// file order with placeholder distances.
///
/// # Errors
///
/// Returns an error for an unknown category, a zero radius, an invalid
/// fallback dataset, or an Overpass client that cannot be built. Upstream
/// lookup failures are not errors; they surface as fallback results.
pub(crate) async fn run_nearby(
    config: &AppConfig,
    category: &str,
    origin: Option<Coordinate>,
    radius: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let categories = select_categories(category)?;
    let radius_m = radius.unwrap_or(config.default_radius_m);
    if radius_m == 0 {
        anyhow::bail!("--radius must be greater than zero");
    }

    let catalog = load_catalog(config)?;

    let results: Vec<ResolutionResult> = match origin {
        Some(origin) => {
            let client = OverpassClient::with_endpoint(
                &config.overpass_url,
                config.request_timeout_secs,
                &config.user_agent,
            )
            .map_err(|e| anyhow::anyhow!("failed to build Overpass client: {e}"))?;
            let resolver = FacilityResolver::new(client).with_radius_ceiling(config.radius_ceiling_m);

            join_all(categories.iter().map(|c| {
                resolver.resolve(origin, c, radius_m, catalog.for_category(&c.key))
            }))
            .await
        }
        None => {
            tracing::warn!("no location given; showing fallback facilities without distances");
            categories
                .iter()
                .map(|c| fallback_result(c, catalog.for_category(&c.key), None, radius_m))
                .collect()
        }
    };

    if json {
        let payload: serde_json::Map<String, serde_json::Value> = categories
            .iter()
            .zip(&results)
            .map(|(c, r)| Ok((c.key.clone(), serde_json::to_value(r)?)))
            .collect::<Result<_, serde_json::Error>>()?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for (category, result) in categories.iter().zip(&results) {
        print!("{}", render_result(category, result, origin.is_some()));
    }
    Ok(())
}

/// Print the built-in categories with their Overpass tag filters.
pub(crate) fn print_categories() {
    for category in FacilityCategory::all_builtin() {
        let clauses: Vec<String> = category.clauses().iter().map(ToString::to_string).collect();
        println!(
            "{:<14} {:<18} {}",
            category.key,
            category.default_label,
            clauses.join(" OR ")
        );
    }
}

fn select_categories(key: &str) -> anyhow::Result<Vec<FacilityCategory>> {
    if key.trim().eq_ignore_ascii_case("all") {
        return Ok(FacilityCategory::all_builtin());
    }
    Ok(vec![FacilityCategory::from_key(key)?])
}

/// A missing dataset file degrades to an empty catalog; a malformed one is an error.
fn load_catalog(config: &AppConfig) -> anyhow::Result<FallbackCatalog> {
    match load_fallback(&config.fallback_path) {
        Ok(catalog) => Ok(catalog),
        Err(ConfigError::FallbackFileIo { path, source }) => {
            tracing::warn!(
                path = %path,
                error = %source,
                "fallback dataset unavailable; continuing without it"
            );
            Ok(FallbackCatalog::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn render_result(category: &FacilityCategory, result: &ResolutionResult, origin_known: bool) -> String {
    use std::fmt::Write as _;

    let mut out = format!(
        "== {} ({} found, radius {} m)\n",
        category.default_label,
        result.facilities.len(),
        result.radius_used_m
    );
    if result.used_fallback {
        out.push_str("   showing sample data\n");
    }
    for facility in &result.facilities {
        let _ = writeln!(out, "   {}", render_facility(facility, origin_known));
    }
    out
}

fn render_facility(facility: &Facility, origin_known: bool) -> String {
    let distance = if origin_known {
        format!("{:>7.1} km", facility.distance_km)
    } else {
        format!("{:>10}", "?")
    };
    let mut line = format!("{distance}  {}  {}", facility.name, facility.address);
    if let Some(phone) = &facility.phone_number {
        line.push_str("  tel ");
        line.push_str(phone);
    }
    if facility.open_now == Some(true) {
        line.push_str("  [open]");
    }
    line
}
