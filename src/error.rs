use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Language already registered: {0}")]
    DuplicateLanguage(String),

    #[error("Invalid language '{id}': {reason}")]
    InvalidLanguage { id: String, reason: String },

    #[error("Failed to read source {path}: {source}")]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl TallyError {
    /// Short, stable name of the error kind for machine-readable output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::UnknownLanguage(_) => "UnknownLanguage",
            Self::DuplicateLanguage(_) => "DuplicateLanguage",
            Self::InvalidLanguage { .. } => "InvalidLanguage",
            Self::UnreadableSource { .. } => "UnreadableSource",
            Self::Config(_) => "Config",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::UnreadableSource {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
