//! # seed-core
//!
//! Shared pieces for the people seeding tools: [`SeedError`] and tracing initialization.

pub mod error;
pub mod logger;

pub use error::{Result, SeedError};
pub use logger::init_tracing;
