//! Error types for the clause diff engine

use thiserror::Error;

/// Which of the two compared documents an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSide {
    Original,
    Revised,
}

impl std::fmt::Display for DocumentSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentSide::Original => write!(f, "original"),
            DocumentSide::Revised => write!(f, "revised"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("The {side} document is empty")]
    EmptyInput { side: DocumentSide },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("Explanation unavailable: {0}")]
    Unavailable(String),
}
