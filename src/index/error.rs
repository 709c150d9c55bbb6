//! Directory indexer error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a listing before it starts
///
/// Problems with individual entries below the root never surface here; they
/// are logged and the entry is skipped.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The root is missing or is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The root directory exists but cannot be read
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
