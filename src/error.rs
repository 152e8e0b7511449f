//! Error types for shipfee

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// shipfee errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid weight: {weight} (must be greater than 0 and at most {max} kg)")]
    InvalidWeight { weight: f64, max: f64 },

    #[error("invalid zone: \"{0}\" (expected one of Domestic, International, Express)")]
    InvalidZone(String),

    #[error("Rate card parse error: {0}")]
    RateParse(String),

    #[error("Case table parse error: {0}")]
    CaseParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
