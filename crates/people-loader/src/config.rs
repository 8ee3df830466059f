//! Load configuration.
//!
//! Defines [`LoadConfig`] (record count, batch size, bulk endpoint) and [`LoadResult`].
//! Values come from env with the same defaults the tool always had: 1000 records in a
//! single request to the local `people` index.

use std::env;

use bulk_client::BulkConfig;
use person_generator::DEFAULT_PEOPLE_COUNT;
use seed_core::{Result, SeedError};

use crate::report::LoadOutcome;

/// Data load config. Built from env (SEED_PEOPLE_COUNT, SEED_BATCH_SIZE, BULK_*).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    pub bulk: BulkConfig,
    /// Number of person records to generate.
    pub count: usize,
    /// Documents per bulk request; None = all records in one request.
    pub batch_size: Option<usize>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            bulk: BulkConfig::default(),
            count: DEFAULT_PEOPLE_COUNT,
            batch_size: None,
        }
    }
}

impl LoadConfig {
    /// Load from environment variables. Unparsable numbers fall back to defaults.
    pub fn from_env() -> Self {
        let count = env::var("SEED_PEOPLE_COUNT")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_PEOPLE_COUNT);
        let batch_size = env::var("SEED_BATCH_SIZE")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok());

        Self {
            bulk: BulkConfig::from_env(),
            count,
            batch_size,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bulk.validate()?;
        if self.batch_size == Some(0) {
            return Err(SeedError::Config(
                "SEED_BATCH_SIZE must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Documents per request after defaulting; never 0.
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.unwrap_or(self.count).max(1)
    }
}

/// Result of a load run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    /// Records generated.
    pub total: usize,
    /// Records carried by requests that returned 200.
    pub sent: usize,
    /// Bulk requests issued, including a failed last one.
    pub requests: usize,
    pub outcome: LoadOutcome,
    pub elapsed_ms: u128,
}
