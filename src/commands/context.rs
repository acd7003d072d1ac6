use std::fs;
use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;

/// Load the configuration honoring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if an explicit or discovered config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        tracing::debug!("configuration loading disabled");
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = match config_path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };

    match &result.source {
        Some(path) => tracing::info!(path = %path.display(), "loaded configuration"),
        None => tracing::debug!("no configuration file found, using defaults"),
    }
    Ok(result.config)
}

/// Write formatted output to a file, or to stdout unless `quiet`.
///
/// File output is always written; `quiet` only silences stdout.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "wrote report");
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
