use submit_core::{StatusEntry, STATUS_LOG_CAPACITY};
use submit_logging::{submit_debug, submit_warn};

use crate::storage::{KeyValueStorage, StorageError};

/// Storage key holding the JSON array of status entries, newest first.
pub const STATUS_STORAGE_KEY: &str = "videoSubmissionStatuses";

/// Persisted submission history. Storage failures are logged, never raised.
pub struct StatusStore {
    storage: Box<dyn KeyValueStorage>,
}

impl StatusStore {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Returns the stored history, or nothing if it is absent or unreadable.
    pub fn load(&self) -> Vec<StatusEntry> {
        match self.read_entries() {
            Ok(entries) => {
                submit_debug!("Loaded {} status entries", entries.len());
                entries
            }
            Err(err) => {
                submit_warn!("Failed to read status history: {}", err);
                Vec::new()
            }
        }
    }

    /// Absent or malformed history reads as empty; storage errors propagate.
    fn read_entries(&self) -> Result<Vec<StatusEntry>, StorageError> {
        let Some(text) = self.storage.get(STATUS_STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<StatusEntry>>(&text) {
            Ok(mut entries) => {
                entries.truncate(STATUS_LOG_CAPACITY);
                Ok(entries)
            }
            Err(err) => {
                submit_warn!("Ignoring malformed status history: {}", err);
                Ok(Vec::new())
            }
        }
    }

    /// Prepends `entry`, keeping only the newest entries. Failures are logged.
    pub fn append(&self, entry: &StatusEntry) {
        if let Err(err) = self.try_append(entry) {
            submit_warn!("Failed to persist status entry: {}", err);
        }
    }

    /// Like `append`, but reports the failure. A failed read skips the write so
    /// existing history is never replaced.
    pub fn try_append(&self, entry: &StatusEntry) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(0, entry.clone());
        entries.truncate(STATUS_LOG_CAPACITY);
        let text = serde_json::to_string(&entries)
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;
        self.storage.set(STATUS_STORAGE_KEY, &text)
    }

    /// Deletes the stored history key. Failures are logged.
    pub fn clear(&self) {
        if let Err(err) = self.storage.remove(STATUS_STORAGE_KEY) {
            submit_warn!("Failed to clear status history: {}", err);
        }
    }
}
