//! Console report of a load outcome.

use std::io::{self, Write};

pub const SUCCESS_MESSAGE: &str = "Data indexed successfully.";

/// What the bulk endpoint said about the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Every request returned 200.
    Indexed,
    /// First request that returned anything other than 200.
    Failed { status: u16, body: String },
}

/// Writes the outcome: the success line, or the status line followed by the raw response text.
pub fn report<W: Write>(outcome: &LoadOutcome, out: &mut W) -> io::Result<()> {
    match outcome {
        LoadOutcome::Indexed => writeln!(out, "{}", SUCCESS_MESSAGE),
        LoadOutcome::Failed { status, body } => {
            writeln!(out, "Failed to index data. Status code: {}", status)?;
            writeln!(out, "{}", body)
        }
    }
}
