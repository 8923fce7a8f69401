use std::fmt;

/// Failure classification for a history fetch.
///
/// Every way a fetch can go wrong maps to exactly one variant, so the
/// caller can decide per kind how to surface it.
#[derive(Debug)]
pub enum FetchError {
    /// No API key was available from the flag or the environment.
    MissingCredential,

    /// Transport-level failure: DNS resolution, connect, timeout, TLS.
    Network(String),

    /// The API rejected the credential (HTTP 401).
    Unauthorized,

    /// The API has no history for the domain (HTTP 404).
    NotFound,

    /// The response body was not the expected JSON shape.
    InvalidPayload(String),

    /// Any other non-success status, with the raw body kept for diagnosis.
    ApiError {
        status: u16,
        status_text: String,
        body: String,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::MissingCredential => write!(f, "No API key available"),
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Unauthorized => write!(f, "API key rejected (HTTP 401)"),
            FetchError::NotFound => write!(f, "No history on record (HTTP 404)"),
            FetchError::InvalidPayload(msg) => write!(f, "Unexpected API payload: {}", msg),
            FetchError::ApiError {
                status,
                status_text,
                ..
            } => write!(f, "API error: {} {}", status, status_text),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            FetchError::Network(format!("Connection failed: {}", err))
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
