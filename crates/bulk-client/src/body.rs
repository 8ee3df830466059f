//! NDJSON bulk body encoding.
//!
//! Each document becomes an action line followed by the document line. Every line ends
//! with `\n` and there is no wrapper around the payload, so the body is not itself a
//! single JSON value.

use serde::Serialize;

use crate::error::Result;

/// Action-metadata line: index into the endpoint's index with a generated id.
pub const INDEX_ACTION_LINE: &str = r#"{"index":{}}"#;

/// Content type bulk endpoints expect for NDJSON bodies.
pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// Encodes `docs` as a bulk body: `2 * docs.len()` lines, each a standalone JSON value.
///
/// Documents are written compactly; string fields containing newlines are escaped by
/// JSON, so a document never spans more than one line.
pub fn encode_bulk_body<T: Serialize>(docs: &[T]) -> Result<String> {
    let mut body = String::new();
    for doc in docs {
        body.push_str(INDEX_ACTION_LINE);
        body.push('\n');
        body.push_str(&serde_json::to_string(doc)?);
        body.push('\n');
    }
    Ok(body)
}
