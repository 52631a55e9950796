use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept, both on screen and in storage.
pub const STATUS_LOG_CAPACITY: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Pending,
    Success,
    Error,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatusKind::Pending => "pending",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        };
        f.pad(label)
    }
}

/// One line of submission history. `timestamp` is already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    // Older histories were written with `type`.
    #[serde(alias = "type")]
    pub kind: StatusKind,
    pub message: String,
    pub timestamp: String,
}

impl StatusEntry {
    pub fn new(kind: StatusKind, message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Newest-first history capped at [`STATUS_LOG_CAPACITY`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLog {
    entries: VecDeque<StatusEntry>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from entries already ordered newest first, dropping the overflow.
    pub fn from_newest_first(entries: impl IntoIterator<Item = StatusEntry>) -> Self {
        Self {
            entries: entries.into_iter().take(STATUS_LOG_CAPACITY).collect(),
        }
    }

    pub fn push(&mut self, entry: StatusEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(STATUS_LOG_CAPACITY);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&StatusEntry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<StatusEntry> {
        self.entries.iter().cloned().collect()
    }
}
