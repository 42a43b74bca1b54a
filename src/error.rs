use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Odds feed errors that are not plain transport failures.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("missing API key: set {var}")]
    MissingApiKey { var: &'static str },

    #[error("feed returned status {status} for {sport}")]
    UnexpectedStatus { sport: String, status: u16 },

    #[error("invalid feed dump {path}: {reason}")]
    InvalidDump { path: String, reason: String },

    #[error("all {count} sports failed to fetch")]
    AllSportsFailed { count: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("task error: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, Error>;
