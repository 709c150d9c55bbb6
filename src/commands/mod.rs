//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the session's stores.

pub mod config;
pub mod log;
pub mod relocate;
pub mod rename;
pub mod tag;
pub mod tags;
pub mod tree;

// Re-export execute functions for convenience
pub use self::config::execute as config;
pub use self::log::execute as log;
pub use self::relocate::{execute as relocate, open};
pub use self::rename::{execute as rename, history, revert};
pub use self::tag::{execute as tag, untag};
pub use self::tags::execute as tags;
pub use self::tree::execute as tree;

use crate::ImgtagError;
use crate::codec::TAG_MARKER;
use crate::engine::ImageFile;
use std::path::Path;

type Result<T> = std::result::Result<T, ImgtagError>;

/// Resolve a command-line path to an existing image file
///
/// # Errors
///
/// Returns `ImgtagError::InvalidInput` if the path cannot be accessed.
pub fn resolve_image(file_path: &Path) -> Result<ImageFile> {
    let fullpath = file_path.canonicalize().map_err(|e| {
        ImgtagError::InvalidInput(format!(
            "Cannot access path '{}': {}",
            file_path.display(),
            e
        ))
    })?;
    Ok(ImageFile::new(fullpath))
}

/// Check that `part` can be spliced into a file name
///
/// Rejects empty text, path separators and the tag marker, any of which
/// would change how the resulting name decodes.
///
/// # Errors
///
/// Returns `ImgtagError::InvalidInput` describing the problem.
pub fn validate_name_part(kind: &str, part: &str) -> Result<()> {
    validate_plain(kind, part)?;
    if part.contains(TAG_MARKER) {
        return Err(ImgtagError::InvalidInput(format!(
            "{kind} '{part}' contains the tag marker '{TAG_MARKER}'"
        )));
    }
    Ok(())
}

/// Check a complete bare name, tags included, as found in a history file
///
/// # Errors
///
/// Returns `ImgtagError::InvalidInput` if the name is blank or contains a
/// path separator.
pub fn validate_bare_name(name: &str) -> Result<()> {
    validate_plain("name", name)
}

fn validate_plain(kind: &str, part: &str) -> Result<()> {
    if part.trim().is_empty() {
        return Err(ImgtagError::InvalidInput(format!("Empty {kind}")));
    }
    if part.contains('/') || part.contains('\\') {
        return Err(ImgtagError::InvalidInput(format!(
            "{kind} '{part}' contains a path separator"
        )));
    }
    Ok(())
}
