use super::*;

fn test_client(endpoint: &str) -> OverpassClient {
    OverpassClient::with_endpoint(endpoint, 5, "safehaven-test/0.1")
        .expect("client construction should not fail")
}

fn kolkata() -> Coordinate {
    Coordinate::new(22.5726, 88.3639).unwrap()
}

#[test]
fn build_url_carries_query_as_data_param() {
    let client = test_client("https://overpass-api.de/api/interpreter");
    let clauses = [TagClause::new("amenity", "hospital")];
    let url = client.build_url(kolkata(), &clauses, 10_000);

    assert_eq!(url.path(), "/api/interpreter");
    let data = url
        .query_pairs()
        .find(|(k, _)| k == "data")
        .map(|(_, v)| v.into_owned());
    assert_eq!(data, Some(build_query(kolkata(), &clauses, 10_000)));
}

#[test]
fn build_url_percent_encodes_query() {
    let client = test_client("https://overpass-api.de/api/interpreter");
    let url = client.build_url(kolkata(), &[TagClause::new("amenity", "police")], 500);
    let raw = url.as_str();
    assert!(!raw.contains('"'), "quotes must be encoded: {raw}");
    assert!(!raw.contains(' '), "no raw spaces allowed: {raw}");
}

#[test]
fn with_endpoint_rejects_garbage() {
    let err = OverpassClient::with_endpoint("not a url", 5, "ua").unwrap_err();
    assert!(
        matches!(err, OverpassError::InvalidEndpoint { .. }),
        "expected InvalidEndpoint, got: {err:?}"
    );
}

#[test]
fn with_endpoint_rejects_non_http_scheme() {
    let err = OverpassClient::with_endpoint("ftp://overpass.example/api", 5, "ua").unwrap_err();
    assert!(matches!(err, OverpassError::InvalidEndpoint { ref reason, .. } if reason.contains("ftp")));
}

#[test]
fn new_uses_public_instance() {
    let client = OverpassClient::new(5, "ua").unwrap();
    assert_eq!(client.endpoint.as_str(), DEFAULT_OVERPASS_URL);
}
