//! Testing utilities for imgtag
//!
//! Provides a `TestDir` wrapper around a temporary directory with helpers
//! for laying out image fixtures.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory that is removed when dropped
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a fresh, empty temporary directory
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create test directory");
        Self { dir }
    }

    /// Root of the temporary directory
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `relative` inside the directory (nothing is created)
    #[must_use]
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Create a file (and its parent directories) with default content
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn touch(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        create_test_file(&path).expect("Failed to create test file");
        path
    }

    /// Create a directory (and its parents)
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn mkdir(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a test file with default content
///
/// # Errors
/// Returns an `io::Error` if the file cannot be created or written.
pub fn create_test_file(path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(b"test content")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_creates_parents() {
        let dir = TestDir::new();
        let file = dir.touch("a/b/c.jpg");
        assert!(file.exists());
        assert_eq!(fs::read(&file).unwrap(), b"test content");
    }

    #[test]
    fn test_dir_removed_on_drop() {
        let root = {
            let dir = TestDir::new();
            dir.mkdir("nested");
            dir.path().to_path_buf()
        };
        assert!(!root.exists());
    }
}
