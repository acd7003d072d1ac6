use std::fmt::Write;

use crate::counter::COLUMNS;
use crate::error::Result;

use super::{FileReport, OutputFormatter, total_tally};

const SOURCE_HEADER: &str = "source";
const TOTAL_LABEL: &str = "total";
const NUMBER_WIDTH: usize = 8;

/// Fixed-column table, one row per source plus a total row for multiple sources.
#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_row(
        output: &mut String,
        widths: (usize, usize),
        source: &str,
        language: &str,
        counts: [usize; 5],
    ) {
        let (source_width, language_width) = widths;
        let _ = write!(output, "{source:<source_width$}  {language:<language_width$}");
        for count in counts {
            let _ = write!(output, "{count:>NUMBER_WIDTH$}");
        }
        output.push('\n');
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[FileReport]) -> Result<String> {
        let source_width = results
            .iter()
            .map(|r| r.source.chars().count())
            .chain([SOURCE_HEADER.len(), TOTAL_LABEL.len()])
            .max()
            .unwrap_or(0);
        let language_width = results
            .iter()
            .map(|r| r.report.language.chars().count())
            .chain([COLUMNS[0].len()])
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        let _ = write!(
            output,
            "{SOURCE_HEADER:<source_width$}  {:<language_width$}",
            COLUMNS[0]
        );
        for name in &COLUMNS[1..] {
            let _ = write!(output, "{name:>NUMBER_WIDTH$}");
        }
        output.push('\n');

        for result in results {
            let (language, code, blank, inline, block, remark) = result.report.values();
            Self::write_row(
                &mut output,
                (source_width, language_width),
                &result.source,
                language,
                [code, blank, inline, block, remark],
            );
        }

        if results.len() > 1 {
            let total = total_tally(results);
            Self::write_row(
                &mut output,
                (source_width, language_width),
                TOTAL_LABEL,
                "",
                [
                    total.code,
                    total.blank,
                    total.inline,
                    total.block,
                    total.remark(),
                ],
            );
        }

        for result in results {
            if let Some(end) = &result.report.open_block_end {
                let _ = writeln!(
                    output,
                    "\nnote: {} ends inside an unterminated block comment (expected `{end}`)",
                    result.source
                );
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
