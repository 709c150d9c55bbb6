//! The set of known tags

use super::{JournalError, TextJournal};
use std::path::PathBuf;

/// Known tags, in insertion order, persisted one per line
///
/// Deleting a tag only forgets it here; files still carrying the tag in
/// their names keep it.
#[derive(Debug, Clone)]
pub struct TagStore {
    journal: TextJournal,
    tags: Vec<String>,
}

impl TagStore {
    /// Load the tag set stored at `path`
    ///
    /// # Errors
    ///
    /// Returns `JournalError` if an existing file cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, JournalError> {
        let journal = TextJournal::new(path);
        let tags = journal.load()?;
        Ok(Self::from_snapshot(journal, tags))
    }

    /// Build a store from an already loaded snapshot
    ///
    /// Blank lines and repeated tags in the snapshot are dropped.
    #[must_use]
    pub fn from_snapshot(journal: TextJournal, snapshot: Vec<String>) -> Self {
        let mut store = Self {
            journal,
            tags: Vec::with_capacity(snapshot.len()),
        };
        for tag in snapshot {
            if !tag.is_empty() {
                store.add(tag);
            }
        }
        store
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Add a tag; returns `false` if it was already known
    pub fn add(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Forget a tag; returns `false` if it was not known
    pub fn delete(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Write the current set back to disk
    ///
    /// # Errors
    ///
    /// Returns `JournalError` if the file cannot be written.
    pub fn flush(&self) -> Result<(), JournalError> {
        self.journal.save(&self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDir;

    #[test]
    fn test_add_and_delete() {
        let dir = TestDir::new();
        let mut store = TagStore::open(dir.join("tags.txt")).unwrap();

        assert!(store.add("landscape"));
        assert!(store.contains("landscape"));
        assert!(store.delete("landscape"));
        assert!(store.tags().is_empty());
    }

    #[test]
    fn test_add_is_deduplicated() {
        let dir = TestDir::new();
        let mut store = TagStore::open(dir.join("tags.txt")).unwrap();
        assert!(store.add("sky"));
        assert!(!store.add("sky"));
        assert_eq!(store.tags(), ["sky"]);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let dir = TestDir::new();
        let mut store = TagStore::open(dir.join("tags.txt")).unwrap();
        store.add("sky");
        assert!(!store.delete("sea"));
        assert_eq!(store.tags(), ["sky"]);
    }

    #[test]
    fn test_flush_and_reload() {
        let dir = TestDir::new();
        let path = dir.join("tags.txt");

        let mut store = TagStore::open(&path).unwrap();
        store.add("landscape");
        store.add("lovely");
        store.flush().unwrap();

        let reloaded = TagStore::open(&path).unwrap();
        assert_eq!(reloaded.tags(), ["landscape", "lovely"]);
    }

    #[test]
    fn test_nothing_written_before_flush() {
        let dir = TestDir::new();
        let path = dir.join("tags.txt");
        let mut store = TagStore::open(&path).unwrap();
        store.add("sky");
        assert!(!path.exists());
    }

    #[test]
    fn test_snapshot_cleanup() {
        let journal = TextJournal::new("unused.txt");
        let store = TagStore::from_snapshot(
            journal,
            vec!["a".into(), String::new(), "b".into(), "a".into()],
        );
        assert_eq!(store.tags(), ["a", "b"]);
    }
}
