use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SAFEHAVEN_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.overpass_url, DEFAULT_OVERPASS_URL);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.default_radius_m, 10_000);
    assert_eq!(cfg.radius_ceiling_m, 50_000);
    assert_eq!(
        cfg.fallback_path.to_str(),
        Some("./config/fallback_facilities.yaml")
    );
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("SAFEHAVEN_ENV", "test");
    map.insert("SAFEHAVEN_OVERPASS_URL", "http://localhost:9000/api/interpreter");
    map.insert("SAFEHAVEN_REQUEST_TIMEOUT_SECS", "5");
    map.insert("SAFEHAVEN_DEFAULT_RADIUS_M", "30000");
    map.insert("SAFEHAVEN_RADIUS_CEILING_M", "75000");
    map.insert("SAFEHAVEN_FALLBACK_PATH", "/etc/safehaven/fallback.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Test);
    assert_eq!(cfg.overpass_url, "http://localhost:9000/api/interpreter");
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_eq!(cfg.default_radius_m, 30_000);
    assert_eq!(cfg.radius_ceiling_m, 75_000);
    assert_eq!(cfg.fallback_path.to_str(), Some("/etc/safehaven/fallback.yaml"));
}

#[test]
fn build_app_config_rejects_zero_radius() {
    let mut map = HashMap::new();
    map.insert("SAFEHAVEN_DEFAULT_RADIUS_M", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SAFEHAVEN_DEFAULT_RADIUS_M"),
        "expected InvalidEnvVar(SAFEHAVEN_DEFAULT_RADIUS_M), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_ceiling() {
    let mut map = HashMap::new();
    map.insert("SAFEHAVEN_RADIUS_CEILING_M", "fifty-km");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SAFEHAVEN_RADIUS_CEILING_M"),
        "expected InvalidEnvVar(SAFEHAVEN_RADIUS_CEILING_M), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("SAFEHAVEN_REQUEST_TIMEOUT_SECS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SAFEHAVEN_REQUEST_TIMEOUT_SECS"),
        "got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_blank_overpass_url() {
    let mut map = HashMap::new();
    map.insert("SAFEHAVEN_OVERPASS_URL", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SAFEHAVEN_OVERPASS_URL"),
        "got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("SAFEHAVEN_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SAFEHAVEN_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SAFEHAVEN_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn log_level_defaults_follow_environment() {
    let mut map = HashMap::new();
    map.insert("SAFEHAVEN_ENV", "production");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");

    map.insert("SAFEHAVEN_LOG_LEVEL", "warn,safehaven_locator=debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "warn,safehaven_locator=debug");
}
