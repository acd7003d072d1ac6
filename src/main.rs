use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use line_tally::cli::{Cli, Commands};
use line_tally::commands::{run_count, run_init, run_languages};

const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(cli.verbose, cli.quiet).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let exit_code = match &cli.command {
        Commands::Count(args) => run_count(args, &cli),
        Commands::Languages => run_languages(&cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
