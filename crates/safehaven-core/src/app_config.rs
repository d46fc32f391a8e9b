use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// `EnvFilter` directive used when `SAFEHAVEN_LOG_LEVEL` is unset.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Test | Environment::Production => "info",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Overpass-compatible interpreter endpoint.
    pub overpass_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Search radius used when the caller does not pick one.
    pub default_radius_m: u32,
    /// Live queries that come back empty below this radius are retried once at it.
    pub radius_ceiling_m: u32,
    pub fallback_path: PathBuf,
}
