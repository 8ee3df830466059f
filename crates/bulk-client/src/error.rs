//! Errors raised while encoding or sending a bulk request.

use thiserror::Error;

/// Failure before a response status was available.
///
/// A non-200 response is not an error here; it comes back as a [`crate::BulkResponse`].
#[derive(Error, Debug)]
pub enum BulkError {
    #[error("Failed to encode bulk document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Bulk request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid bulk endpoint: {0}")]
    Endpoint(String),
}

pub type Result<T> = std::result::Result<T, BulkError>;
