use std::fmt::Write;

use crate::cli::Cli;
use crate::language::LanguageRegistry;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_languages(cli: &Cli) -> i32 {
    match run_languages_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            crate::output::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_languages_impl(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let registry = config.registry()?;
    print!("{}", format_languages(&registry));
    Ok(())
}

/// One line per language: id, inline marker, block marker pairs, aliases, suffix.
#[must_use]
pub fn format_languages(registry: &LanguageRegistry) -> String {
    let width = registry.ids().map(str::len).max().unwrap_or(0);
    let mut output = String::new();

    for profile in registry.all() {
        let blocks = profile
            .block_markers
            .iter()
            .map(|m| format!("{} ... {}", m.start, m.end))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(
            output,
            "{:<width$}  inline: {}",
            profile.id, profile.inline_marker
        );
        if !blocks.is_empty() {
            let _ = write!(output, "  block: {blocks}");
        }
        if !profile.aliases.is_empty() {
            let _ = write!(output, "  aliases: {}", profile.aliases.join(", "));
        }
        if let Some(suffix) = &profile.suffix {
            let _ = write!(output, "  suffix: .{suffix}");
        }
        output.push('\n');
    }

    output
}
