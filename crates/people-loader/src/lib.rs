//! # People Loader
//!
//! Generates person records and loads them into a search engine through its bulk endpoint,
//! then reports whether the endpoint accepted them.

mod config;
mod report;

pub use config::{LoadConfig, LoadResult};
pub use report::{report, LoadOutcome, SUCCESS_MESSAGE};

use std::time::Instant;

use anyhow::{Context, Result};
use bulk_client::{encode_bulk_body, BulkTransport};
use person_generator::generate_people;
use serde::Serialize;
use tracing::{info, warn};

/// Runs the full load: generate `config.count` records, then send them in bulk.
///
/// # Flow
///
/// 1. Generate records (random, unseeded).
/// 2. Split into batches of [`LoadConfig::effective_batch_size`] (one batch by default).
/// 3. For each batch: encode as NDJSON, send, stop at the first non-200 response.
///
/// # Errors
///
/// Encoding or transport failures (no response at all) are returned; non-200 responses
/// are not errors and come back as [`LoadOutcome::Failed`].
pub async fn load(config: &LoadConfig, transport: &dyn BulkTransport) -> Result<LoadResult> {
    info!(
        count = config.count,
        batch_size = config.effective_batch_size(),
        endpoint = %config.bulk.endpoint,
        username = %config.bulk.username,
        password = %config.bulk.masked_password(),
        "Starting people load"
    );

    let people = generate_people(config.count);
    info!(generated = people.len(), "Generated person records");

    load_documents(&people, config.effective_batch_size(), transport).await
}

/// Sends already-built documents in batches of `batch_size` (clamped to at least 1).
pub async fn load_documents<T: Serialize + Sync>(
    docs: &[T],
    batch_size: usize,
    transport: &dyn BulkTransport,
) -> Result<LoadResult> {
    let start_time = Instant::now();
    let batch_size = batch_size.max(1);

    let mut sent = 0;
    let mut requests = 0;
    let mut outcome = LoadOutcome::Indexed;

    for (index, batch) in docs.chunks(batch_size).enumerate() {
        let body = encode_bulk_body(batch)
            .with_context(|| format!("Encode bulk batch {}", index))?;
        info!(
            batch = index,
            documents = batch.len(),
            body_bytes = body.len(),
            "Sending bulk batch"
        );

        requests += 1;
        let response = transport
            .send_bulk(body)
            .await
            .with_context(|| format!("Send bulk batch {}", index))?;

        if !response.is_success() {
            warn!(batch = index, status = response.status, "Bulk request rejected");
            outcome = LoadOutcome::Failed {
                status: response.status,
                body: response.body,
            };
            break;
        }

        sent += batch.len();
        info!(progress = sent, total = docs.len(), "Bulk batch indexed");
    }

    let elapsed_ms = start_time.elapsed().as_millis();
    info!(
        total = docs.len(),
        sent,
        requests,
        elapsed_ms = elapsed_ms as u64,
        "People load finished"
    );

    Ok(LoadResult {
        total: docs.len(),
        sent,
        requests,
        outcome,
        elapsed_ms,
    })
}
