//! Error types for person store operations.

use thiserror::Error;

/// Errors a `PersonStore` operation can surface.
///
/// The screens never branch on the variant. A failure aborts whatever
/// transition was pending and its message lands in the status line.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested record does not exist in the collection.
    #[error("Person '{id}' not found")]
    NotFound { id: String },

    /// The backend refused the submitted record.
    #[error("Request rejected: {reason}")]
    Rejected { reason: String },

    /// The backend could not be reached.
    #[error("Request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a body that did not parse.
    #[error("Malformed response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with an unexpected status code.
    #[error("Server returned status {code}")]
    Status { code: u16 },

    /// The request exceeded the configured timeout.
    #[error("Request timed out after {duration}s")]
    Timeout { duration: u64 },
}
