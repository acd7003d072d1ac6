use crate::language::LanguageProfile;

/// The category a single line is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Code,
    Blank,
    Inline,
    Block,
}

/// How a line that opens a block comment and also ends with its closing marker is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockPolicy {
    /// The block stays open after any start line; only a later line can close it.
    #[default]
    KeepOpen,
    /// A start line that also ends with the end marker (after the start) closes immediately.
    CloseOnSameLine,
}

/// Whether the scanner sits inside a block comment, and which marker closes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    open_block_end: Option<String>,
}

impl ScanState {
    #[must_use]
    pub const fn outside() -> Self {
        Self {
            open_block_end: None,
        }
    }

    #[must_use]
    pub fn inside(end_marker: &str) -> Self {
        Self {
            open_block_end: Some(end_marker.to_string()),
        }
    }

    /// The closing marker being awaited, if a block comment is open.
    #[must_use]
    pub fn open_block_end(&self) -> Option<&str> {
        self.open_block_end.as_deref()
    }

    #[must_use]
    pub const fn is_inside_block(&self) -> bool {
        self.open_block_end.is_some()
    }
}

/// Classify one line given the state left by the previous line.
///
/// Precedence: open block, inline marker, blank, block start, code.
/// A `None` line is blank and leaves the state untouched.
#[must_use]
pub fn classify(
    line: Option<&str>,
    state: &ScanState,
    profile: &LanguageProfile,
    policy: BlockPolicy,
) -> (Category, ScanState) {
    let Some(line) = line else {
        return (Category::Blank, state.clone());
    };
    let trimmed = line.trim();

    if let Some(end) = state.open_block_end() {
        let next = if trimmed.ends_with(end) {
            ScanState::outside()
        } else {
            state.clone()
        };
        return (Category::Block, next);
    }

    if trimmed.starts_with(profile.inline_marker.as_str()) {
        return (Category::Inline, ScanState::outside());
    }

    if trimmed.is_empty() {
        return (Category::Blank, ScanState::outside());
    }

    for marker in &profile.block_markers {
        if !trimmed.starts_with(marker.start.as_str()) {
            continue;
        }
        let closes_here = policy == BlockPolicy::CloseOnSameLine
            && trimmed.len() >= marker.start.len() + marker.end.len()
            && trimmed.ends_with(marker.end.as_str());
        let next = if closes_here {
            ScanState::outside()
        } else {
            ScanState::inside(&marker.end)
        };
        return (Category::Block, next);
    }

    (Category::Code, ScanState::outside())
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
