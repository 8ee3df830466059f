//! # Bulk Client
//!
//! Encodes documents as an NDJSON bulk body and posts it to a search engine's bulk
//! ingestion endpoint (Elasticsearch / OpenSearch `_bulk` API).
//!
//! ## Example
//!
//! ```rust,no_run
//! use bulk_client::{encode_bulk_body, BulkConfig, BulkTransport, HttpBulkTransport};
//!
//! async fn example() -> Result<(), bulk_client::BulkError> {
//!     let transport = HttpBulkTransport::new(BulkConfig::default())?;
//!     let body = encode_bulk_body(&[serde_json::json!({ "name": "Ada" })])?;
//!     let response = transport.send_bulk(body).await?;
//!     println!("status {}", response.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! [`BulkConfig::from_env`] reads `BULK_ENDPOINT`, `BULK_USERNAME`, `BULK_PASSWORD`.
//! Defaults: `http://localhost:9200/people/_bulk` with empty credentials.

use async_trait::async_trait;

mod body;
mod config;
mod error;
mod http;

pub use body::{encode_bulk_body, INDEX_ACTION_LINE, NDJSON_CONTENT_TYPE};
pub use config::{mask_secret, BulkConfig, DEFAULT_BULK_ENDPOINT};
pub use error::{BulkError, Result};
pub use http::HttpBulkTransport;

/// Status code a bulk endpoint returns when the request was accepted.
pub const BULK_SUCCESS_STATUS: u16 = 200;

/// Status and raw text of a bulk response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkResponse {
    pub status: u16,
    pub body: String,
}

impl BulkResponse {
    /// True only for status 200; other 2xx codes count as failures.
    pub fn is_success(&self) -> bool {
        self.status == BULK_SUCCESS_STATUS
    }
}

/// Carries one encoded bulk body to the ingestion endpoint.
#[async_trait]
pub trait BulkTransport: Send + Sync {
    /// Sends `body` and returns the response status and text. Transport failures are errors;
    /// non-200 statuses are not.
    async fn send_bulk(&self, body: String) -> Result<BulkResponse>;
}
