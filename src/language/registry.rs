use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

use crate::config::CustomLanguageConfig;
use crate::error::{Result, TallyError};

/// A (start, end) delimiter pair for block comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMarker {
    pub start: String,
    pub end: String,
}

impl BlockMarker {
    #[must_use]
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Comment syntax for one language: a single inline marker plus ordered block markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    pub id: String,
    /// Alternative names `get` also resolves, e.g. `js` for `javascript`.
    pub aliases: Vec<String>,
    /// Conventional file suffix, informational only.
    pub suffix: Option<String>,
    pub inline_marker: String,
    pub block_markers: Vec<BlockMarker>,
}

impl LanguageProfile {
    #[must_use]
    pub fn new(id: &str, inline_marker: &str, block_markers: Vec<(&str, &str)>) -> Self {
        Self {
            id: id.to_string(),
            aliases: Vec::new(),
            suffix: None,
            inline_marker: inline_marker.to_string(),
            block_markers: block_markers
                .into_iter()
                .map(|(start, end)| BlockMarker::new(start, end))
                .collect(),
        }
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| (*a).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = Some(suffix.to_string());
        self
    }

    /// Reject profiles whose markers would match every line.
    ///
    /// # Errors
    /// Returns `InvalidLanguage` if the id, an alias, or any marker is empty.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| TallyError::InvalidLanguage {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("language id is empty"));
        }
        if self.aliases.iter().any(|a| a.trim().is_empty()) {
            return Err(invalid("alias is empty"));
        }
        if self.inline_marker.is_empty() {
            return Err(invalid("inline marker is empty"));
        }
        if self
            .block_markers
            .iter()
            .any(|m| m.start.is_empty() || m.end.is_empty())
        {
            return Err(invalid("block marker start and end must be non-empty"));
        }
        Ok(())
    }
}

/// Lookup table from language id (or alias) to its comment syntax.
///
/// Built once up front and then shared read-only by any number of classifiers.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    profiles: IndexMap<String, LanguageProfile>,
    aliases: HashMap<String, String>,
    allow_overwrite: bool,
}

impl LanguageRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new(allow_overwrite: bool) -> Self {
        Self {
            profiles: IndexMap::new(),
            aliases: HashMap::new(),
            allow_overwrite,
        }
    }

    /// Create a registry holding the built-in `python`, `sql` and `javascript` profiles.
    #[must_use]
    pub fn builtin(allow_overwrite: bool) -> Self {
        let mut registry = Self::new(true);
        for profile in builtin_profiles() {
            registry.insert(profile);
        }
        registry.allow_overwrite = allow_overwrite;
        registry
    }

    /// Built-in profiles extended with languages from the configuration file.
    ///
    /// # Errors
    /// Returns `InvalidLanguage` for malformed entries, or `DuplicateLanguage` when an
    /// entry collides with an existing id or alias and overwriting is disabled.
    pub fn with_custom_languages(
        custom: &BTreeMap<String, CustomLanguageConfig>,
        allow_overwrite: bool,
    ) -> Result<Self> {
        let mut registry = Self::builtin(allow_overwrite);

        for (id, config) in custom {
            registry.register(LanguageProfile {
                id: id.clone(),
                aliases: config.aliases.clone(),
                suffix: config.suffix.clone(),
                inline_marker: config.inline_marker.clone(),
                block_markers: config
                    .block_markers
                    .iter()
                    .map(|(start, end)| BlockMarker::new(start, end))
                    .collect(),
            })?;
        }

        Ok(registry)
    }

    /// Add a profile keyed by its id and aliases. Last write wins unless overwriting
    /// is disabled.
    ///
    /// # Errors
    /// Returns `InvalidLanguage` if the profile fails validation, or `DuplicateLanguage`
    /// if its id or an alias is taken and overwriting is disabled.
    pub fn register(&mut self, profile: LanguageProfile) -> Result<()> {
        profile.validate()?;

        if !self.allow_overwrite {
            let taken = std::iter::once(&profile.id)
                .chain(&profile.aliases)
                .find(|name| self.resolve(name).is_some());
            if let Some(name) = taken {
                return Err(TallyError::DuplicateLanguage(name.clone()));
            }
        }

        self.insert(profile);
        Ok(())
    }

    /// # Errors
    /// Returns `UnknownLanguage` if `name` is neither a registered id nor an alias.
    pub fn get(&self, name: &str) -> Result<&LanguageProfile> {
        self.resolve(name)
            .ok_or_else(|| TallyError::UnknownLanguage(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn all(&self) -> impl Iterator<Item = &LanguageProfile> {
        self.profiles.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn resolve(&self, name: &str) -> Option<&LanguageProfile> {
        self.profiles.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|id| self.profiles.get(id))
        })
    }

    fn insert(&mut self, profile: LanguageProfile) {
        self.aliases.retain(|_, id| *id != profile.id);
        for alias in &profile.aliases {
            self.aliases.insert(alias.clone(), profile.id.clone());
        }
        self.profiles.insert(profile.id.clone(), profile);
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin(true)
    }
}

fn builtin_profiles() -> Vec<LanguageProfile> {
    vec![
        LanguageProfile::new(
            "python",
            "#",
            vec![
                ("'''", "'''"),
                ("\"\"\"", "\"\"\""),
                ("r'''", "'''"),
                ("r\"\"\"", "\"\"\""),
            ],
        )
        .with_aliases(&["py"])
        .with_suffix("py"),
        LanguageProfile::new("sql", "--", vec![("/*", "*/")]).with_suffix("sql"),
        LanguageProfile::new("javascript", "//", vec![("/*", "*/")])
            .with_aliases(&["js"])
            .with_suffix("js"),
    ]
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
