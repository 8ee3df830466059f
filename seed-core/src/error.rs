//! Error types shared by the seeding crates.
//!
//! [`SeedError`] covers configuration and local IO failures. Transport and encoding
//! failures live in `bulk_client::BulkError`.

use thiserror::Error;

/// Top-level error for seeding (config, logging setup, IO).
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Logger error: {0}")]
    Logger(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`SeedError`].
pub type Result<T> = std::result::Result<T, SeedError>;
