use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_USER_AGENT: &str = "safehaven/0.1 (emergency-facility-finder)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_timeout = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let secs = parse_u64(var, default)?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "timeout must be greater than zero".to_string(),
            });
        }
        Ok(secs)
    };

    let parse_radius = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        let meters = raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if meters == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "radius must be greater than zero".to_string(),
            });
        }
        Ok(meters)
    };

    let env = parse_environment(&or_default("SAFEHAVEN_ENV", "development"))?;
    let log_level = or_default("SAFEHAVEN_LOG_LEVEL", env.default_log_level());

    let overpass_url = or_default("SAFEHAVEN_OVERPASS_URL", DEFAULT_OVERPASS_URL);
    if overpass_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "SAFEHAVEN_OVERPASS_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let request_timeout_secs = parse_timeout("SAFEHAVEN_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SAFEHAVEN_USER_AGENT", DEFAULT_USER_AGENT);
    let default_radius_m = parse_radius("SAFEHAVEN_DEFAULT_RADIUS_M", "10000")?;
    let radius_ceiling_m = parse_radius("SAFEHAVEN_RADIUS_CEILING_M", "50000")?;
    let fallback_path = PathBuf::from(or_default(
        "SAFEHAVEN_FALLBACK_PATH",
        "./config/fallback_facilities.yaml",
    ));

    Ok(AppConfig {
        env,
        log_level,
        overpass_url,
        request_timeout_secs,
        user_agent,
        default_radius_m,
        radius_ceiling_m,
        fallback_path,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SAFEHAVEN_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
