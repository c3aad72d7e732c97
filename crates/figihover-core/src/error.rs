use thiserror::Error;

/// Validation and contract errors exposed by `figihover-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("identifier cannot be empty")]
    EmptyIdentifier,
    #[error("invalid SEDOL body '{value}', expected 6 characters from [0-9BCDFGHJKLMNPQRSTVWXYZ]")]
    InvalidSedolFormat { value: String },
    #[error("'{value}' is not a valid {kind}")]
    ShapeMismatch { kind: &'static str, value: String },
    #[error("SEDOL '{value}' fails its check digit")]
    SedolChecksum { value: String },

    #[error("invalid identifier kind '{value}', expected one of isin, sedol, cusip")]
    InvalidKind { value: String },

    #[error("endpoint must be an http(s) URL: '{value}'")]
    InvalidEndpoint { value: String },
    #[error("timeout_ms must be greater than zero")]
    InvalidTimeout,
}

/// Errors raised while loading host settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file '{path}' is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("setting '{key}' must be a string")]
    NotAString { key: &'static str },
}
