use std::path::PathBuf;

use reelstrip_core::ConfigurationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error(
        "no carousel manifest found (set REELSTRIP_CONFIG_PATH or REELSTRIP_CONFIG_JSON, or add carousel.toml)"
    )]
    NotFound,

    #[error("failed to load carousel manifest from {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("failed to read carousel manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{names} caption names listed for {videos} videos")]
    NameCountMismatch { videos: usize, names: usize },

    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}
