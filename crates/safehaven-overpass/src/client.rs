//! HTTP client for an Overpass-API-compatible interpreter endpoint.
//!
//! Wraps `reqwest` with Overpass query construction, typed status handling,
//! and response decoding into [`RawFacilityRecord`]s.

use std::time::Duration;

use reqwest::{Client, Url};

use safehaven_core::config::DEFAULT_OVERPASS_URL;
use safehaven_core::{Coordinate, RawFacilityRecord, TagClause};

use crate::error::OverpassError;
use crate::query::build_query;
use crate::types::{OverpassElement, OverpassResponse};

/// Client for the Overpass interpreter.
///
/// Use [`OverpassClient::new`] for the public instance or
/// [`OverpassClient::with_endpoint`] to point at a mirror or a mock server.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    endpoint: Url,
}

impl OverpassClient {
    /// Creates a client pointed at the public Overpass instance.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, OverpassError> {
        Self::with_endpoint(DEFAULT_OVERPASS_URL, timeout_secs, user_agent)
    }

    /// Creates a client for a custom interpreter URL.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`OverpassError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute http(s) URL.
    pub fn with_endpoint(
        endpoint: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(endpoint.trim()).map_err(|e| OverpassError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(OverpassError::InvalidEndpoint {
                url: endpoint.to_owned(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            client,
            endpoint: parsed,
        })
    }

    /// Fetches every node matching any of `clauses` within `radius_m` metres
    /// of `origin`.
    ///
    /// Elements without a usable position are dropped. An empty or missing
    /// `elements` array yields `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::Http`] on network failure or timeout.
    /// - [`OverpassError::UnexpectedStatus`] on any non-2xx status.
    /// - [`OverpassError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_nodes(
        &self,
        origin: Coordinate,
        clauses: &[TagClause],
        radius_m: u32,
    ) -> Result<Vec<RawFacilityRecord>, OverpassError> {
        let url = self.build_url(origin, clauses, radius_m);
        tracing::debug!(
            radius_m,
            clauses = clauses.len(),
            latitude = origin.latitude,
            longitude = origin.longitude,
            "querying Overpass"
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OverpassError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| OverpassError::Deserialize {
                context: format!("Overpass response (radius {radius_m} m)"),
                source: e,
            })?;

        let total = parsed.elements.len();
        let records: Vec<RawFacilityRecord> = parsed
            .elements
            .into_iter()
            .filter_map(OverpassElement::into_record)
            .collect();
        if records.len() < total {
            tracing::debug!(
                dropped = total - records.len(),
                "skipped Overpass elements without a valid position"
            );
        }

        Ok(records)
    }

    /// Builds the request URL with the QL query percent-encoded as `data`.
    fn build_url(&self, origin: Coordinate, clauses: &[TagClause], radius_m: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("data", &build_query(origin, clauses, radius_m));
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
