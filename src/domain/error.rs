//! Error types for the hnsearch plugin.
//!
//! [`HnSearchError`] covers everything that can fail while talking to the
//! search API or loading plugin resources. The state machine itself never
//! stores an `HnSearchError`; it records a clonable [`FetchFailure`] instead,
//! which is what the UI reads back when it decides to show the error notice.

use thiserror::Error;

/// The main error type for hnsearch operations.
///
/// # Examples
///
/// ```
/// use hnsearch::domain::HnSearchError;
///
/// let err = HnSearchError::HttpStatus { status: 503, body: "unavailable".to_string() };
/// assert_eq!(err.status(), Some(503));
/// ```
#[derive(Debug, Error)]
pub enum HnSearchError {
    /// The search API (or the host on its behalf) answered with a non-2xx status.
    ///
    /// Zellij reports transport failures such as DNS errors this way too, with
    /// the error text in the body.
    #[error("Search request failed with status {status}: {body}")]
    HttpStatus {
        /// HTTP status code returned by the host.
        status: u16,
        /// Response body, truncated for display.
        body: String,
    },

    /// The response body could not be decoded as a search page.
    #[error("Malformed search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl HnSearchError {
    /// Returns the HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A recorded search failure.
///
/// This is the single error kind kept in application state. It is produced
/// whenever the search collaborator rejects a request or returns a body that
/// cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// Human-readable description of what went wrong.
    pub message: String,

    /// HTTP status, when the failure came from a response.
    pub status: Option<u16>,
}

impl FetchFailure {
    /// Creates a failure with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }
}

impl From<&HnSearchError> for FetchFailure {
    fn from(err: &HnSearchError) -> Self {
        Self {
            message: err.to_string(),
            status: err.status(),
        }
    }
}

impl From<HnSearchError> for FetchFailure {
    fn from(err: HnSearchError) -> Self {
        Self::from(&err)
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// A specialized `Result` type for hnsearch operations.
pub type Result<T> = std::result::Result<T, HnSearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failure_keeps_status_from_http_errors() {
        let err = HnSearchError::HttpStatus {
            status: 429,
            body: "slow down".to_string(),
        };
        let failure = FetchFailure::from(&err);
        assert_eq!(failure.status, Some(429));
        assert!(failure.message.contains("429"));
        assert!(failure.message.contains("slow down"));
    }

    #[test]
    fn fetch_failure_from_decode_error_has_no_status() {
        let decode = serde_json::from_str::<serde_json::Value>("{not json")
            .map_err(HnSearchError::from)
            .unwrap_err();
        let failure = FetchFailure::from(decode);
        assert_eq!(failure.status, None);
        assert!(failure.message.starts_with("Malformed search response"));
    }
}
