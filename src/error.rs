use thiserror::Error;

#[derive(Error, Debug)]
pub enum FmpError {
    #[error("API credential is not set")]
    CredentialNotSet,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Access denied: the current subscription does not cover this endpoint")]
    InvalidSubscription,

    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("Upstream API error: {0}")]
    UpstreamError(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Decode error: {0}")]
    DecodeError(String),
}

impl From<serde_json::Error> for FmpError {
    fn from(error: serde_json::Error) -> Self {
        FmpError::DecodeError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FmpError>;
