use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::counter::BlockPolicy;
use crate::error::Result;
use crate::language::LanguageRegistry;

pub const DEFAULT_LANGUAGE: &str = "python";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Language used when none is given on the command line.
    #[serde(default = "default_language")]
    pub language: String,

    /// Accumulate counts (and block state) across all sources of one run.
    #[serde(default)]
    pub cumulative: bool,

    /// Let `[languages.<id>]` entries replace built-in profiles.
    #[serde(default = "default_true")]
    pub allow_overwrite: bool,

    #[serde(default)]
    pub single_line_blocks: SingleLineBlocks,

    #[serde(default)]
    pub languages: BTreeMap<String, CustomLanguageConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            cumulative: false,
            allow_overwrite: true,
            single_line_blocks: SingleLineBlocks::default(),
            languages: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Build the language registry described by this configuration.
    ///
    /// # Errors
    /// Returns an error if a custom language is malformed or collides with a
    /// built-in while `allow_overwrite` is false.
    pub fn registry(&self) -> Result<LanguageRegistry> {
        LanguageRegistry::with_custom_languages(&self.languages, self.allow_overwrite)
    }

    #[must_use]
    pub const fn block_policy(&self) -> BlockPolicy {
        self.single_line_blocks.policy()
    }
}

/// Treatment of a block comment that opens and closes on the same line.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SingleLineBlocks {
    /// `/* note */` keeps the block open until a later line ends with `*/`.
    #[default]
    KeepOpen,
    /// `/* note */` is a complete one-line block comment.
    Close,
}

impl SingleLineBlocks {
    #[must_use]
    pub const fn policy(self) -> BlockPolicy {
        match self {
            Self::KeepOpen => BlockPolicy::KeepOpen,
            Self::Close => BlockPolicy::CloseOnSameLine,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    pub inline_marker: String,

    /// Extra names accepted by `--lang`.
    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default)]
    pub suffix: Option<String>,

    #[serde(default)]
    pub block_markers: Vec<(String, String)>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
