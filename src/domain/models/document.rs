use std::fmt;

use serde::{Deserialize, Serialize};

/// Which part of the host document an action works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentScope {
    Selection,
    Body,
}

impl DocumentScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for DocumentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub match_case: bool,
    pub match_whole_word: bool,
}

impl SearchOptions {
    /// Case-insensitive substring search, used to anchor review comments.
    pub fn loose() -> Self {
        Self {
            match_case: false,
            match_whole_word: false,
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::loose()
    }
}

/// Handle to a search hit. Offsets are byte positions into the host's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextMatch {
    start: usize,
    end: usize,
}

impl TextMatch {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

/// Outcome of writing a review back into a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationReport {
    pub anchored: usize,
    pub unanchored: usize,
    pub summary_appended: bool,
}

impl AnnotationReport {
    pub fn total_comments(&self) -> usize {
        self.anchored + self.unanchored
    }
}
