//! Journal error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving a line journal
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
