//! TomTom client error types.

use std::fmt;

use crate::planner::ServiceError;

/// Errors from the TomTom HTTP client.
#[derive(Debug)]
pub enum TomTomError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed or the response shape was unusable
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid or missing API key
    Unauthorized,

    /// A matrix cell carried no usable travel time
    Matrix { index: usize, message: String },
}

impl fmt::Display for TomTomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TomTomError::Http(e) => write!(f, "HTTP error: {e}"),
            TomTomError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            TomTomError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            TomTomError::RateLimited => write!(f, "rate limited by TomTom API"),
            TomTomError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            TomTomError::Matrix { index, message } => {
                write!(f, "matrix cell {index} unusable: {message}")
            }
        }
    }
}

impl std::error::Error for TomTomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TomTomError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TomTomError {
    fn from(err: reqwest::Error) -> Self {
        TomTomError::Http(err)
    }
}

impl From<TomTomError> for ServiceError {
    fn from(err: TomTomError) -> Self {
        match err {
            TomTomError::Http(e) => ServiceError::Network(e.to_string()),
            TomTomError::Json { message, .. } => ServiceError::Malformed(message),
            TomTomError::Api { status, message } => ServiceError::Status { status, message },
            TomTomError::RateLimited => ServiceError::Status {
                status: 429,
                message: "rate limited".to_string(),
            },
            TomTomError::Unauthorized => ServiceError::Status {
                status: 403,
                message: "unauthorized".to_string(),
            },
            TomTomError::Matrix { index, message } => {
                ServiceError::Malformed(format!("matrix cell {index}: {message}"))
            }
        }
    }
}
