//! History of successful evaluations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of entries shown by default.
pub const DEFAULT_WINDOW: usize = 10;

/// One successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The equation with display glyphs.
    pub display_equation: String,
    /// The formatted result.
    pub formatted_result: String,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.display_equation, self.formatted_result)
    }
}

/// Append-only history.
///
/// Storage is unbounded; `window` only limits what [`History::recent_window`]
/// shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    window: usize,
}

impl History {
    pub fn new(window: usize) -> Self {
        Self { entries: Vec::new(), window }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// The last `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    /// The visible window of entries.
    pub fn recent_window(&self) -> &[HistoryEntry] {
        self.recent(self.window)
    }

    /// Every entry ever recorded.
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
