use thiserror::Error;

/// Outcome of a failed system fetch. `Display` is the text shown on the page.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request did not complete before its deadline and was dropped
    #[error("Time Out")]
    Timeout,

    /// The host could not be reached at all
    #[error("Server Down, Come Back Later (sorry)")]
    NetworkFailure(String),

    /// A response came back with a non-2xx status
    #[error("Server error: {0}")]
    HttpStatus(u16),

    /// The body could not be read or was not a valid system record
    #[error("{0}")]
    DecodeFailure(String),

    /// The request could not be built (malformed URL and the like)
    #[error("{0}")]
    InvalidRequest(String),
}

impl FetchError {
    /// Classify a transport-level reqwest failure.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_builder() {
            FetchError::InvalidRequest(err.to_string())
        } else if err.is_decode() || err.is_body() {
            FetchError::DecodeFailure(err.to_string())
        } else {
            FetchError::NetworkFailure(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::DecodeFailure(err.to_string())
    }
}
