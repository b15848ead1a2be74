//! In-memory journal slice.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::entry::JournalEntry;
use crate::error::ValidationError;

/// Ordered journal entries, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalState {
    #[serde(default)]
    entries: Vec<JournalEntry>,
}

impl JournalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a slice from entries already in newest-first order.
    pub fn from_entries(entries: Vec<JournalEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend a new entry.
    ///
    /// # Errors
    /// Returns a validation error if the response is blank or the timestamp
    /// is already taken by another entry.
    pub fn add_entry(&mut self, entry: JournalEntry) -> Result<(), ValidationError> {
        entry.validate()?;
        if self.get(&entry.timestamp).is_some() {
            return Err(ValidationError::DuplicateTimestamp(entry.timestamp));
        }
        info!(timestamp = %entry.timestamp, "journal entry added");
        self.entries.insert(0, entry);
        Ok(())
    }

    pub fn get(&self, timestamp: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.timestamp == timestamp)
    }

    /// Entries whose prompt or response contains `query`, ignoring case.
    ///
    /// An empty query matches everything. Order is preserved.
    pub fn search(&self, query: &str) -> Vec<&JournalEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.prompt.to_lowercase().contains(&needle)
                    || e.response.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Remove the entry keyed by `timestamp`. Returns whether anything was removed.
    pub fn delete_entry(&mut self, timestamp: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.timestamp != timestamp);
        let removed = self.entries.len() != before;
        if removed {
            info!(%timestamp, "journal entry deleted");
        }
        removed
    }

    pub fn clear_entries(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry_at(hour: u32) -> JournalEntry {
        JournalEntry::new(
            "How do you define success?",
            format!("answer at {hour}"),
            Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap(),
        )
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut state = JournalState::new();
        state.add_entry(entry_at(8)).unwrap();
        state.add_entry(entry_at(9)).unwrap();
        assert_eq!(state.entries()[0].response, "answer at 9");
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn add_rejects_blank_and_duplicate() {
        let mut state = JournalState::new();
        let mut blank = entry_at(8);
        blank.response = " ".into();
        assert_eq!(state.add_entry(blank), Err(ValidationError::EmptyResponse));

        state.add_entry(entry_at(8)).unwrap();
        let dup = entry_at(8);
        let ts = dup.timestamp.clone();
        assert_eq!(
            state.add_entry(dup),
            Err(ValidationError::DuplicateTimestamp(ts))
        );
    }

    #[test]
    fn delete_removes_only_matching_entry() {
        let mut state = JournalState::new();
        for hour in [8, 9, 10] {
            state.add_entry(entry_at(hour)).unwrap();
        }
        let target = entry_at(9).timestamp;
        assert!(state.delete_entry(&target));
        assert!(!state.delete_entry(&target));
        assert_eq!(state.len(), 2);
        assert!(state.get(&target).is_none());
    }

    #[test]
    fn search_folds_case_over_prompt_and_response() {
        let mut state = JournalState::new();
        state
            .add_entry(JournalEntry::new(
                "What brings you JOY?",
                "long walks",
                Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            ))
            .unwrap();
        state
            .add_entry(JournalEntry::new(
                "How do you define success?",
                "Finding Joy in small things",
                Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap(),
            ))
            .unwrap();

        assert_eq!(state.search("joy").len(), 2);

        let prompt_only = state.search("brings");
        assert_eq!(prompt_only.len(), 1);
        assert_eq!(prompt_only[0].response, "long walks");

        assert_eq!(state.search("WALKS").len(), 1);
        assert!(state.search("coffee").is_empty());
        assert_eq!(state.search("").len(), 2);
    }

    #[test]
    fn clear_empties_slice() {
        let mut state = JournalState::new();
        state.add_entry(entry_at(8)).unwrap();
        state.clear_entries();
        assert!(state.is_empty());
    }
}
