//! Journal of renames, newest first

use super::{JournalError, TextJournal};
use crate::codec;
use crate::engine::RenameSink;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Separator between the old and the new name of an entry
pub const ENTRY_SEPARATOR: &str = "--->-";

/// Timestamp layout of log entries
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Human-readable record of every rename, newest entry first
#[derive(Debug, Clone)]
pub struct RenameLog {
    journal: TextJournal,
    entries: Vec<String>,
}

impl RenameLog {
    /// Load the log stored at `path`
    ///
    /// # Errors
    ///
    /// Returns `JournalError` if an existing file cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, JournalError> {
        let journal = TextJournal::new(path);
        let entries = journal.load()?;
        Ok(Self::from_snapshot(journal, entries))
    }

    #[must_use]
    pub const fn from_snapshot(journal: TextJournal, entries: Vec<String>) -> Self {
        Self { journal, entries }
    }

    /// Entries, newest first
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Prepend an entry for a rename that happened now
    pub fn record(&mut self, from: &Path, to: &Path) {
        self.record_at(from, to, Local::now());
    }

    /// Prepend an entry for a rename that happened at `at`
    pub fn record_at(&mut self, from: &Path, to: &Path, at: DateTime<Local>) {
        let entry = format!(
            "{}{ENTRY_SEPARATOR}{} Changed at: {}",
            display_name(from),
            display_name(to),
            at.format(TIMESTAMP_FORMAT)
        );
        self.entries.insert(0, entry);
    }

    /// Write the log back to disk
    ///
    /// # Errors
    ///
    /// Returns `JournalError` if the file cannot be written.
    pub fn flush(&self) -> Result<(), JournalError> {
        self.journal.save(&self.entries)
    }
}

impl RenameSink for RenameLog {
    fn renamed(&mut self, from: &Path, to: &Path) {
        self.record(from, to);
    }
}

// Bare names when decodable, the plain file name otherwise
fn display_name(path: &Path) -> String {
    codec::bare_name(path).map_or_else(
        |_| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        },
        str::to_string,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDir;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap()
    }

    #[test]
    fn test_entry_format_uses_new_name() {
        let mut log = RenameLog::from_snapshot(TextJournal::new("log.txt"), Vec::new());
        log.record_at(
            Path::new("/p/sunset.jpg"),
            Path::new("/p/sunset @sky.jpg"),
            at(),
        );
        assert_eq!(
            log.entries(),
            ["sunset--->-sunset @sky Changed at: 2021-03-04 05:06:07"]
        );
    }

    #[test]
    fn test_newest_first() {
        let mut log = RenameLog::from_snapshot(TextJournal::new("log.txt"), Vec::new());
        log.record_at(Path::new("a.jpg"), Path::new("b.jpg"), at());
        log.record_at(Path::new("b.jpg"), Path::new("c.jpg"), at());
        assert!(log.entries()[0].starts_with("b--->-c "));
        assert!(log.entries()[1].starts_with("a--->-b "));
    }

    #[test]
    fn test_sink_records() {
        let mut log = RenameLog::from_snapshot(TextJournal::new("log.txt"), Vec::new());
        log.renamed(Path::new("x.png"), Path::new("y.png"));
        assert_eq!(log.entries().len(), 1);
        assert!(log.entries()[0].starts_with("x--->-y Changed at: "));
    }

    #[test]
    fn test_flush_and_reload() {
        let dir = TestDir::new();
        let path = dir.join("log.txt");
        let mut log = RenameLog::open(&path).unwrap();
        log.record_at(Path::new("a.jpg"), Path::new("b.jpg"), at());
        log.flush().unwrap();

        let reloaded = RenameLog::open(&path).unwrap();
        assert_eq!(reloaded.entries(), log.entries());
    }
}
