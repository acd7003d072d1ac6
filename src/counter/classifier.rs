use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Result, TallyError};
use crate::language::{LanguageProfile, LanguageRegistry};

use super::{BlockPolicy, Category, ClassificationTally, Report, ScanState, classify};

/// Placeholder path reported when a handle (rather than a file) fails mid-read.
const READER_PATH: &str = "<reader>";

/// Where a scan takes its lines from.
pub enum Source<'a> {
    /// In-memory text content.
    Text(&'a str),
    /// An already-open readable handle.
    Reader(Box<dyn BufRead + 'a>),
    /// A UTF-8 text file on disk.
    Path(&'a Path),
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a Path> for Source<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for Source<'a> {
    fn from(path: &'a PathBuf) -> Self {
        Self::Path(path.as_path())
    }
}

/// Counts lines of one language, tracking block comments across lines.
///
/// In non-cumulative mode every scan starts from an empty tally outside any block.
/// In cumulative mode both the tally and the open-block state carry over, so
/// scanning `A` then `B` equals scanning `A` followed by `B` in one go.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    profile: LanguageProfile,
    cumulative: bool,
    policy: BlockPolicy,
    tally: ClassificationTally,
    state: ScanState,
}

impl LineClassifier {
    #[must_use]
    pub fn new(profile: LanguageProfile, cumulative: bool) -> Self {
        Self {
            profile,
            cumulative,
            policy: BlockPolicy::default(),
            tally: ClassificationTally::new(),
            state: ScanState::outside(),
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: BlockPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Scan any [`Source`] and return the resulting report.
    ///
    /// # Errors
    /// Returns `UnreadableSource` if a path cannot be opened or a line is not valid UTF-8.
    pub fn scan(&mut self, source: Source<'_>) -> Result<Report> {
        match source {
            Source::Text(text) => Ok(self.scan_str(text)),
            Source::Reader(reader) => self.scan_reader(reader),
            Source::Path(path) => self.scan_path(path),
        }
    }

    pub fn scan_str(&mut self, text: &str) -> Report {
        self.scan_lines(text.lines())
    }

    /// Scan an ordered sequence of lines.
    pub fn scan_lines<I, S>(&mut self, lines: I) -> Report
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.begin_scan();
        for line in lines {
            self.feed(Some(line.as_ref()));
        }
        self.report()
    }

    /// Scan a buffered reader line by line.
    ///
    /// # Errors
    /// Returns `UnreadableSource` if reading fails; lines read before the failure stay counted.
    pub fn scan_reader<R: BufRead>(&mut self, reader: R) -> Result<Report> {
        self.scan_reader_as(reader, Path::new(READER_PATH))
    }

    /// # Errors
    /// Returns `UnreadableSource` if the file is missing, unreadable, or not UTF-8.
    pub fn scan_path(&mut self, path: &Path) -> Result<Report> {
        let file = File::open(path).map_err(|e| TallyError::unreadable(path, e))?;
        self.scan_reader_as(BufReader::new(file), path)
    }

    /// Scan with another registered language for this call only.
    ///
    /// # Errors
    /// Returns `UnknownLanguage` if `language` is not registered, before anything is counted.
    pub fn scan_as(
        &mut self,
        source: Source<'_>,
        registry: &LanguageRegistry,
        language: &str,
    ) -> Result<Report> {
        let profile = registry.get(language)?.clone();
        let saved = std::mem::replace(&mut self.profile, profile);
        let result = self.scan(source);
        self.profile = saved;
        result
    }

    /// Classify a single line against the current state and count it.
    pub fn feed(&mut self, line: Option<&str>) -> Category {
        let (category, next) = classify(line, &self.state, &self.profile, self.policy);
        self.state = next;
        self.tally.record(category);
        category
    }

    /// Zero the tally and drop any open block comment.
    pub fn reset(&mut self) {
        self.tally = ClassificationTally::new();
        self.state = ScanState::outside();
    }

    #[must_use]
    pub fn report(&self) -> Report {
        Report::new(&self.profile.id, self.tally, self.state.open_block_end())
    }

    #[must_use]
    pub const fn tally(&self) -> &ClassificationTally {
        &self.tally
    }

    #[must_use]
    pub fn open_block_end(&self) -> Option<&str> {
        self.state.open_block_end()
    }

    #[must_use]
    pub const fn is_block_open(&self) -> bool {
        self.state.is_inside_block()
    }

    #[must_use]
    pub const fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    #[must_use]
    pub const fn is_cumulative(&self) -> bool {
        self.cumulative
    }

    fn begin_scan(&mut self) {
        if !self.cumulative {
            self.reset();
        }
    }

    fn scan_reader_as<R: BufRead>(&mut self, reader: R, path: &Path) -> Result<Report> {
        self.begin_scan();
        for line in reader.lines() {
            let line = line.map_err(|e| TallyError::unreadable(path, e))?;
            self.feed(Some(&line));
        }
        Ok(self.report())
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
