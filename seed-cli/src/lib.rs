//! # seed-cli
//!
//! Argument parsing and config loading for the `seed-people` binary.

pub mod cli;

pub use cli::{load_config, Cli, Commands};
