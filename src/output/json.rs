use serde::Serialize;

use crate::counter::{ClassificationTally, Report};
use crate::error::Result;

use super::{FileReport, OutputFormatter, total_tally};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: ClassificationTally,
    results: Vec<SourceResult<'a>>,
}

#[derive(Serialize)]
struct SourceResult<'a> {
    source: &'a str,
    #[serde(flatten)]
    report: &'a Report,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[FileReport]) -> Result<String> {
        let output = JsonOutput {
            summary: total_tally(results),
            results: results
                .iter()
                .map(|r| SourceResult {
                    source: &r.source,
                    report: &r.report,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
