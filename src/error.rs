use thiserror::Error;

/// Rejected inbound query parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("owner or repo is empty")]
    MissingOwnerOrRepo,
}

/// Failures while asking the upstream API for a release.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body transfer failure.
    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not JSON, or not shaped like a release.
    #[error("upstream body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("upstream base url cannot carry path segments: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(var: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            var,
            reason: reason.into(),
        }
    }
}
