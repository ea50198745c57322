use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlasmaSourceError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown geometry basis '{0}': expected one of xyz, ry, rz")]
    UnknownBasis(String),

    #[error("Sampling requires {required} random variates, got {supplied}")]
    InsufficientVariates { required: usize, supplied: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SourceResult<T> = Result<T, PlasmaSourceError>;
