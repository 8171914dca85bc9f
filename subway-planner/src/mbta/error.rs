//! MBTA client error types.

/// Errors that can occur when fetching from the MBTA API.
#[derive(Debug, thiserror::Error)]
pub enum MbtaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or username
    #[error("unauthorized: check MBTA_API_KEY and MBTA_USERNAME")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by MBTA API")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Credentials cannot be sent as an HTTP header
    #[error("invalid credentials: {0}")]
    InvalidCredentials(&'static str),
}
