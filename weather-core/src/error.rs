use reqwest::StatusCode;
use thiserror::Error;

/// Every way a [`WeatherClient`](crate::WeatherClient) call can fail.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Weather service request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Fixed failure reported by fixture implementations.
    #[error("Weather service failure (domain '{domain}', code {code})")]
    Service { domain: &'static str, code: i64 },
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown client '{0}'. Supported clients: live, empty, happy-path, failed.")]
pub struct UnknownClient(pub String);
