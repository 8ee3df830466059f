//! Tracing initialization. Events go to stderr so stdout stays reserved for command output.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
    Registry,
};

use crate::error::{Result, SeedError};

/// Installs the global tracing subscriber.
///
/// Level comes from `RUST_LOG` (default `info`). When `log_file_path` is given the same
/// formatted output is appended to that file as well as stderr.
/// Load `.env` before calling this, otherwise `RUST_LOG` from the file is not seen.
pub fn init_tracing(log_file_path: Option<&str>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    let registry = Registry::default().with(env_filter);

    let installed = match log_file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let writer = io::stderr.and(Arc::new(file));
            registry
                .with(fmt_layer.with_writer(writer).with_ansi(false))
                .try_init()
        }
        None => registry.with(fmt_layer.with_writer(io::stderr)).try_init(),
    };

    installed.map_err(|e| SeedError::Logger(format!("Failed to set global subscriber: {}", e)))
}
