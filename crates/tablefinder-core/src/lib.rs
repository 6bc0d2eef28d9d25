pub mod app_config;
pub mod candidates;
pub mod config;
pub mod places;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use candidates::{
    filter_by_region, load_candidates, Candidate, CandidatesFile, Coordinate,
    UNKNOWN_PRICE_LEVEL,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use places::{candidates_from_places, PlaceResult, PlacesError, PlacesResponse};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read candidates file {path}: {source}")]
    CandidatesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse candidates file: {0}")]
    CandidatesFileParse(#[from] serde_yaml::Error),

    #[error("candidate validation failed: {0}")]
    Validation(String),
}
