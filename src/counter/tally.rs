use std::ops::AddAssign;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::Category;

/// Column names of a report row, in display order.
pub const COLUMNS: [&str; 6] = ["language", "code", "blank", "inline", "block", "remark"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationTally {
    pub code: usize,
    pub blank: usize,
    pub inline: usize,
    pub block: usize,
}

impl ClassificationTally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: 0,
            blank: 0,
            inline: 0,
            block: 0,
        }
    }

    /// All comment lines: inline plus block.
    #[must_use]
    pub const fn remark(&self) -> usize {
        self.inline + self.block
    }

    /// Number of lines counted since the last reset.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.code + self.blank + self.inline + self.block
    }

    pub const fn record(&mut self, category: Category) {
        match category {
            Category::Code => self.code += 1,
            Category::Blank => self.blank += 1,
            Category::Inline => self.inline += 1,
            Category::Block => self.block += 1,
        }
    }
}

/// Serializes the four counters followed by the derived `remark`.
impl Serialize for ClassificationTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ClassificationTally", 5)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("blank", &self.blank)?;
        state.serialize_field("inline", &self.inline)?;
        state.serialize_field("block", &self.block)?;
        state.serialize_field("remark", &self.remark())?;
        state.end()
    }
}

impl AddAssign for ClassificationTally {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.blank += other.blank;
        self.inline += other.inline;
        self.block += other.block;
    }
}

/// Result of one scan: the tally labelled with the language it was counted as.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Report {
    pub language: String,
    #[serde(flatten)]
    pub tally: ClassificationTally,
    /// End marker still awaited when the scan finished (unterminated block comment).
    pub open_block_end: Option<String>,
}

impl Report {
    #[must_use]
    pub fn new(language: &str, tally: ClassificationTally, open_block_end: Option<&str>) -> Self {
        Self {
            language: language.to_string(),
            tally,
            open_block_end: open_block_end.map(String::from),
        }
    }

    #[must_use]
    pub const fn is_block_open(&self) -> bool {
        self.open_block_end.is_some()
    }

    /// Row values matching [`COLUMNS`].
    #[must_use]
    pub fn values(&self) -> (&str, usize, usize, usize, usize, usize) {
        (
            self.language.as_str(),
            self.tally.code,
            self.tally.blank,
            self.tally.inline,
            self.tally.block,
            self.tally.remark(),
        )
    }
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tests;
