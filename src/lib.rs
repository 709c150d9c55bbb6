//! imgtag - tags encoded in image file names
//!
//! This library stores tags directly in image file names
//! (`sunset @landscape @lovely.jpg`), performs the renames that adding or
//! removing a tag implies, and keeps a per-directory history of every name
//! an image has held so an earlier one can be restored.

use thiserror::Error;

pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod engine;
pub mod history;
pub mod index;
pub mod journal;
pub mod output;
pub mod session;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ImgtagError {
    /// File name could not be decoded
    #[error("Name error: {0}")]
    Codec(#[from] codec::CodecError),
    /// A rename operation failed
    #[error("Rename error: {0}")]
    Engine(#[from] engine::EngineError),
    /// History file could not be read
    #[error("History error: {0}")]
    History(#[from] history::HistoryError),
    /// Directory listing failed
    #[error("Listing error: {0}")]
    Index(#[from] index::IndexError),
    /// Tag set or rename log could not be loaded or saved
    #[error("Journal error: {0}")]
    Journal(#[from] journal::JournalError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Listing could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
