//! Form handlers shared by subcommands and the interactive menu.
//!
//! Each handler submits one form: it calls the matching use case, prints a
//! confirmation on success, and prints an inline warning (no write) when the
//! input fails its presence checks. Any other error is returned.

pub mod attendance;
pub mod employee;
pub mod export;
pub mod report;
pub mod task;

use crate::error::AppError;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Saved,
    Rejected,
}

/// Confirm on success, warn on validation failure, propagate anything else.
pub(crate) fn submit<T, W: Write>(
    out: &mut W,
    result: Result<T, AppError>,
    confirm: impl FnOnce(&T) -> String,
) -> Result<FormOutcome, AppError> {
    match result {
        Ok(saved) => {
            writeln!(out, "{}", confirm(&saved))?;
            Ok(FormOutcome::Saved)
        }
        Err(AppError::Validation(msg)) => {
            log::info!("form rejected: {}", msg);
            writeln!(out, "Warning: {}", msg)?;
            Ok(FormOutcome::Rejected)
        }
        Err(e) => Err(e),
    }
}
