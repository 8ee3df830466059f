//! seed-people CLI: bulk-load fake person records into a search index, or preview the payload.

use std::io::{self, Write};

use anyhow::{Context, Result};
use bulk_client::{encode_bulk_body, HttpBulkTransport};
use clap::Parser;
use people_loader::{load, report};
use person_generator::generate_people;
use seed_cli::{load_config, Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_file = std::env::var("LOG_FILE").ok().filter(|s| !s.trim().is_empty());
    seed_core::init_tracing(log_file.as_deref())?;

    match cli.command {
        Commands::Populate {
            count,
            batch_size,
            endpoint,
        } => handle_populate(count, batch_size, endpoint).await,
        Commands::Preview { count } => handle_preview(count),
    }
}

/// Handle the populate command.
///
/// Transport failures propagate out of `main` and end the process with a non-zero exit;
/// a non-200 response is only reported.
async fn handle_populate(
    count: Option<usize>,
    batch_size: Option<usize>,
    endpoint: Option<String>,
) -> Result<()> {
    let config = load_config(count, batch_size, endpoint)
        .context("Load bulk config from .env (BULK_ENDPOINT, BULK_USERNAME, BULK_PASSWORD)")?;

    let transport = HttpBulkTransport::new(config.bulk.clone())?;
    let result = load(&config, &transport).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&result.outcome, &mut out)?;
    out.flush()?;

    Ok(())
}

fn handle_preview(count: usize) -> Result<()> {
    let people = generate_people(count);
    let body = encode_bulk_body(&people)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(body.as_bytes())?;
    out.flush()?;

    Ok(())
}
