//! Error reporting for command runners.
//!
//! Format: `Error [{error_type}]: {message}`, where the message carries the
//! underlying cause (e.g. the I/O error behind an unreadable source).

use crate::error::TallyError;

#[must_use]
pub fn format_error(error: &TallyError) -> String {
    format!("Error [{}]: {error}", error.error_type())
}

/// Print an error to stderr in the standard format.
pub fn print_error(error: &TallyError) {
    eprintln!("{}", format_error(error));
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
