//! Line-oriented stores for the tag set and the rename log
//!
//! Both stores are loaded once into memory, edited there, and written back
//! in full by an explicit `flush`. They share `TextJournal` for the file
//! handling and otherwise have nothing in common.

pub mod error;
pub mod renames;
pub mod tags;

pub use error::JournalError;
pub use renames::RenameLog;
pub use tags::TagStore;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, JournalError>;

/// Plain text file holding one entry per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextJournal {
    path: PathBuf,
}

impl TextJournal {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every line; a journal that was never saved is empty
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Io` if an existing file cannot be read.
    pub fn load(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Replace the file contents with `lines`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Io` if the file cannot be written.
    pub fn save(&self, lines: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut text = String::new();
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
        fs::write(&self.path, text).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: io::Error) -> JournalError {
        JournalError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
