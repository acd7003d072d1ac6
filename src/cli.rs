use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "line-tally")]
#[command(
    author,
    version,
    about = "Count code, blank, inline comment and block comment lines"
)]
#[command(long_about = "Classify every line of a source file as code, blank, inline \
    comment or block comment, using the comment syntax of one language.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - A source ended inside a block comment (with --strict)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase diagnostic verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress diagnostics and non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count lines of one or more sources
    Count(CountArgs),

    /// List registered languages and their comment markers
    Languages,

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CountArgs {
    /// Files to count (`-` reads standard input)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Language id (overrides config), e.g. python, sql, javascript
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Accumulate counts across all sources into one report
    #[arg(long)]
    pub cumulative: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with code 1 when a source ends inside a block comment
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".line-tally.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
