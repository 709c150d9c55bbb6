//! Engine error types

use crate::codec::CodecError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a single engine operation
#[derive(Debug, Error)]
pub enum EngineError {
    /// The current or target name could not be decoded
    #[error("Name error: {0}")]
    Codec(#[from] CodecError),

    /// The file does not carry a recognized image extension
    #[error("Not an image: {}", .0.display())]
    NotAnImage(PathBuf),

    /// The filesystem rename failed
    ///
    /// The history entry written for the operation has been rolled back
    /// when the history file allowed it.
    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
