pub mod app_config;
pub mod category;
pub mod config;
pub mod facility;
pub mod fallback;
pub mod geo;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use category::{FacilityCategory, TagClause};
pub use config::{load_app_config, load_app_config_from_env};
pub use facility::{Facility, RawFacilityRecord, ResolutionResult, Tags};
pub use fallback::{load_fallback, parse_fallback, FallbackCatalog, FallbackFacility};
pub use geo::{haversine_km, Coordinate, EARTH_RADIUS_KM};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate ({latitude}, {longitude}): {reason}")]
    InvalidCoordinate {
        latitude: f64,
        longitude: f64,
        reason: String,
    },

    #[error("unknown facility category: {0}")]
    UnknownCategory(String),

    #[error("facility category '{0}' must declare at least one tag clause")]
    EmptyClauses(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read fallback dataset {path}: {source}")]
    FallbackFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fallback dataset: {0}")]
    FallbackFileParse(#[source] serde_yaml::Error),

    #[error("fallback dataset validation failed: {0}")]
    Validation(String),
}
