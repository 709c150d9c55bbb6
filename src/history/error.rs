//! History store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing a directory's history file
///
/// The store recovers from these locally (logging them) in its infallible
/// entry points; only the `try_*` variants hand them to the caller.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The history file could not be read or written
    #[error("History unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HistoryError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unavailable {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
