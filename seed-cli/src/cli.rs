//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use people_loader::LoadConfig;

#[derive(Parser, Debug)]
#[command(name = "seed-people")]
#[command(about = "Generate fake person records and bulk-load them into a search index", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Generate records and send them to the bulk endpoint (config from env; flags override).
    Populate {
        /// Number of records (SEED_PEOPLE_COUNT)
        #[arg(short, long)]
        count: Option<usize>,
        /// Records per bulk request (SEED_BATCH_SIZE); default sends everything at once
        #[arg(short, long)]
        batch_size: Option<usize>,
        /// Bulk endpoint URL (BULK_ENDPOINT)
        #[arg(short, long)]
        endpoint: Option<String>,
    },
    /// Print the NDJSON bulk body to stdout without sending it.
    Preview {
        #[arg(short, long, default_value = "5")]
        count: usize,
    },
}

/// Load [`LoadConfig`] from env, apply flag overrides, and validate.
pub fn load_config(
    count: Option<usize>,
    batch_size: Option<usize>,
    endpoint: Option<String>,
) -> Result<LoadConfig> {
    let mut config = LoadConfig::from_env();
    if let Some(count) = count {
        config.count = count;
    }
    if batch_size.is_some() {
        config.batch_size = batch_size;
    }
    if let Some(endpoint) = endpoint {
        config.bulk.endpoint = endpoint;
    }
    config.validate()?;
    Ok(config)
}
