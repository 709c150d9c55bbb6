//! Per-directory rename history
//!
//! Every directory that has seen a rename carries a `history.txt`. The file
//! is a sequence of records, one per image lineage, each listing the bare
//! names the image has held, newest first, and terminated by a blank line:
//!
//! ```text
//! lovelysunset
//! sunset
//!
//! beach @sand
//! beach
//!
//! ```
//!
//! Records are keyed by bare name only, so a lineage is found again no
//! matter which of its names is current. The file is rewritten as a whole on
//! every update because insertions land in the middle of records.

pub mod error;

pub use error::HistoryError;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

type Result<T> = std::result::Result<T, HistoryError>;

/// Name of the history file kept in each directory
pub const HISTORY_FILE_NAME: &str = "history.txt";

/// One image lineage, newest name first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryRecord {
    names: Vec<String>,
}

impl HistoryRecord {
    /// Names in the record, newest first
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// In-memory model of a history file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFile {
    records: Vec<HistoryRecord>,
}

impl HistoryFile {
    /// Parse the text of a history file
    ///
    /// Runs of blank lines never produce empty records and the last record
    /// may omit its terminating blank line.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut records = Vec::new();
        let mut current = HistoryRecord::default();

        for line in text.lines() {
            if line.is_empty() {
                if !current.names.is_empty() {
                    records.push(std::mem::take(&mut current));
                }
            } else {
                current.names.push(line.to_string());
            }
        }
        if !current.names.is_empty() {
            records.push(current);
        }

        Self { records }
    }

    /// Render the file text, every record followed by a blank line
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            for name in &record.names {
                out.push_str(name);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    /// All records in file order
    #[must_use]
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Chain `new_name` onto the lineage containing `old_name`
    ///
    /// The new name goes right before the first line equal to `old_name`.
    /// When no record mentions `old_name`, a fresh record
    /// `[new_name, old_name]` is appended.
    pub fn record_rename(&mut self, old_name: &str, new_name: &str) {
        for record in &mut self.records {
            if let Some(index) = record.position(old_name) {
                record.names.insert(index, new_name.to_string());
                return;
            }
        }
        self.records.push(HistoryRecord {
            names: vec![new_name.to_string(), old_name.to_string()],
        });
    }

    /// Names that followed the first occurrence of `name` in its record
    ///
    /// The matched name itself is excluded. Empty when nothing matches.
    #[must_use]
    pub fn history(&self, name: &str) -> Vec<String> {
        self.records
            .iter()
            .find_map(|record| {
                record
                    .position(name)
                    .map(|index| record.names[index + 1..].to_vec())
            })
            .unwrap_or_default()
    }
}

/// Contents of a history file before a write, for rolling the write back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    path: PathBuf,
    previous: Option<String>,
}

impl HistorySnapshot {
    /// History file the snapshot belongs to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reads and updates the history files of image directories
///
/// Read-modify-write cycles are serialised within the process. Nothing
/// guards against other processes editing the same file.
#[derive(Debug)]
pub struct HistoryStore {
    file_name: String,
    lock: Mutex<()>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    /// Store using the standard `history.txt` file name
    #[must_use]
    pub fn new() -> Self {
        Self::with_file_name(HISTORY_FILE_NAME)
    }

    /// Store using a custom history file name
    #[must_use]
    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            lock: Mutex::new(()),
        }
    }

    /// Location of the history file for `directory`
    #[must_use]
    pub fn path_for(&self, directory: &Path) -> PathBuf {
        directory.join(&self.file_name)
    }

    /// Record a rename, logging and swallowing any I/O failure
    pub fn record_rename(&self, directory: &Path, old_name: &str, new_name: &str) {
        if let Err(e) = self.try_record_rename(directory, old_name, new_name) {
            log::warn!("Rename {old_name} -> {new_name} not recorded: {e}");
        }
    }

    /// Record a rename and return the file contents from before the write
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Unavailable` if the history file cannot be
    /// read or rewritten.
    pub fn try_record_rename(
        &self,
        directory: &Path,
        old_name: &str,
        new_name: &str,
    ) -> Result<HistorySnapshot> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let path = self.path_for(directory);

        let previous = read_optional(&path)?;
        let mut file = previous
            .as_deref()
            .map(HistoryFile::parse)
            .unwrap_or_default();
        file.record_rename(old_name, new_name);

        fs::write(&path, file.render()).map_err(|e| HistoryError::unavailable(&path, e))?;
        log::debug!("Recorded {old_name} -> {new_name} in {}", path.display());

        Ok(HistorySnapshot { path, previous })
    }

    /// Put a history file back to the state captured in `snapshot`
    ///
    /// A file that did not exist before the write is removed again.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Unavailable` if the file cannot be restored.
    pub fn restore(&self, snapshot: HistorySnapshot) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let HistorySnapshot { path, previous } = snapshot;

        let outcome = match previous {
            Some(text) => fs::write(&path, text),
            None => match fs::remove_file(&path) {
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                other => other,
            },
        };
        outcome.map_err(|e| HistoryError::unavailable(&path, e))
    }

    /// Earlier names of `name` in `directory`, newest first
    ///
    /// Failures are logged and reported as an empty history.
    #[must_use]
    pub fn history(&self, directory: &Path, name: &str) -> Vec<String> {
        self.try_history(directory, name).unwrap_or_else(|e| {
            log::warn!("History of {name} unavailable: {e}");
            Vec::new()
        })
    }

    /// Earlier names of `name` in `directory`, newest first
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Unavailable` if an existing history file
    /// cannot be read.
    pub fn try_history(&self, directory: &Path, name: &str) -> Result<Vec<String>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let path = self.path_for(directory);

        Ok(read_optional(&path)?
            .map(|text| HistoryFile::parse(&text).history(name))
            .unwrap_or_default())
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(HistoryError::unavailable(path, e)),
    }
}
