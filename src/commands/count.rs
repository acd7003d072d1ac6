use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::cli::{Cli, CountArgs};
use crate::counter::{BlockPolicy, LineClassifier, Report};
use crate::error::{Result, TallyError};
use crate::language::LanguageProfile;
use crate::output::FileReport;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_UNTERMINATED_BLOCK};

use super::{load_config, write_output};

/// Path argument that means "read standard input".
const STDIN_PATH: &str = "-";
const STDIN_LABEL: &str = "<stdin>";
const CUMULATIVE_LABEL: &str = "(cumulative)";

#[must_use]
pub fn run_count(args: &CountArgs, cli: &Cli) -> i32 {
    match run_count_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            crate::output::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Counts every requested source and writes the report.
///
/// # Errors
/// Returns an error if configuration, language lookup, reading a source, or writing
/// the output fails.
pub fn run_count_impl(args: &CountArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let registry = config.registry()?;

    let language = args.lang.as_deref().unwrap_or(&config.language);
    let profile = registry.get(language)?;
    let cumulative = args.cumulative || config.cumulative;
    tracing::debug!(language, cumulative, "counting {} source(s)", args.paths.len());

    let results = count_sources(&args.paths, profile, cumulative, config.block_policy())?;

    let output = args.format.formatter().format(&results)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    let unterminated: Vec<_> = results
        .iter()
        .filter(|r| r.report.is_block_open())
        .collect();
    for result in &unterminated {
        tracing::info!(
            source = %result.source,
            expected = result.report.open_block_end.as_deref().unwrap_or_default(),
            "source ends inside a block comment"
        );
    }

    if args.strict && !unterminated.is_empty() {
        return Ok(EXIT_UNTERMINATED_BLOCK);
    }
    Ok(EXIT_SUCCESS)
}

/// Count `paths` with `profile`.
///
/// Independent mode counts each source with its own classifier, in parallel.
/// Cumulative mode feeds all sources in order through one classifier and yields a
/// single report.
///
/// # Errors
/// Returns `Config` if standard input is requested more than once, or
/// `UnreadableSource` for the first source that cannot be read.
pub fn count_sources(
    paths: &[PathBuf],
    profile: &LanguageProfile,
    cumulative: bool,
    policy: BlockPolicy,
) -> Result<Vec<FileReport>> {
    if paths.iter().filter(|p| is_stdin(p)).count() > 1 {
        return Err(TallyError::Config(format!(
            "standard input (`{STDIN_PATH}`) can only be counted once"
        )));
    }

    if cumulative {
        let mut classifier = LineClassifier::new(profile.clone(), true).with_policy(policy);
        let mut report = classifier.report();
        for path in paths {
            report = scan_one(&mut classifier, path)?;
            tracing::debug!(source = %source_label(path), total = report.tally.total(), "scanned");
        }
        let label = match paths {
            [single] => source_label(single),
            _ => CUMULATIVE_LABEL.to_string(),
        };
        return Ok(vec![FileReport::new(label, report)]);
    }

    paths
        .par_iter()
        .map(|path| -> Result<FileReport> {
            let mut classifier = LineClassifier::new(profile.clone(), false).with_policy(policy);
            let report = scan_one(&mut classifier, path)?;
            tracing::debug!(source = %source_label(path), total = report.tally.total(), "scanned");
            Ok(FileReport::new(source_label(path), report))
        })
        .collect()
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

fn scan_one(classifier: &mut LineClassifier, path: &Path) -> Result<Report> {
    if is_stdin(path) {
        classifier.scan_reader(io::stdin().lock())
    } else {
        classifier.scan_path(path)
    }
}

fn source_label(path: &Path) -> String {
    if is_stdin(path) {
        STDIN_LABEL.to_string()
    } else {
        path.display().to_string()
    }
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
