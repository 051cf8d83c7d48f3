//! Error types for gradaco.

use thiserror::Error;

/// Default result type for gradaco.
pub type GradacoResult<T> = Result<T, GradacoError>;

/// Errors that can occur while building relation stores or searching.
#[derive(Error, Debug)]
pub enum GradacoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Pheromone invariant violated for attribute {attribute}: weights sum to {total}")]
    PheromoneInvariant { attribute: usize, total: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GradacoError {
    /// Creates a generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a data error.
    pub fn data<S: Into<String>>(msg: S) -> Self {
        Self::DataUnavailable(msg.into())
    }
}
