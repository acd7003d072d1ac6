mod error_output;
mod json;
mod text;

pub use error_output::{format_error, print_error};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::counter::{ClassificationTally, Report};
use crate::error::Result;

/// A report labelled with the source it was produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub source: String,
    pub report: Report,
}

impl FileReport {
    #[must_use]
    pub fn new(source: impl Into<String>, report: Report) -> Self {
        Self {
            source: source.into(),
            report,
        }
    }
}

/// Sum of all tallies in `results`.
#[must_use]
pub fn total_tally(results: &[FileReport]) -> ClassificationTally {
    results
        .iter()
        .fold(ClassificationTally::new(), |mut acc, r| {
            acc += r.report.tally;
            acc
        })
}

/// Trait for formatting tally reports into various output formats.
pub trait OutputFormatter {
    /// Format the reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, results: &[FileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new()),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
