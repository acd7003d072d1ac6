use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, TallyError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            crate::output::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(TallyError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# line-tally configuration file

# Language used when --lang is not given (built-in: python, sql, javascript)
language = "python"

# Accumulate counts across all sources of a run (default: false)
cumulative = false

# Allow [languages.*] entries to replace built-in languages (default: true)
allow_overwrite = true

# How "/* note */" on a single line is treated:
#   "keep-open" - the block stays open until a later line ends with the end marker
#   "close"     - the line is a complete block comment
single_line_blocks = "keep-open"

# Custom languages
# [languages.lua]
# inline_marker = "--"
# block_markers = [["--[[", "]]"]]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
