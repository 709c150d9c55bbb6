//! Move and open commands

use super::resolve_image;
use crate::{ImgtagError, output, session::Session};
use std::path::Path;

type Result<T> = std::result::Result<T, ImgtagError>;

/// Execute the move command - move an image into another folder
///
/// # Errors
/// Returns an error if the image or the destination cannot be accessed, or
/// the move fails
pub fn execute(session: &mut Session, file: &Path, directory: &Path) -> Result<()> {
    let destination = directory.canonicalize().map_err(|e| {
        ImgtagError::InvalidInput(format!(
            "Cannot access folder '{}': {}",
            directory.display(),
            e
        ))
    })?;
    if !destination.is_dir() {
        return Err(ImgtagError::InvalidInput(format!(
            "'{}' is not a folder",
            directory.display()
        )));
    }

    let mut image = resolve_image(file)?;
    let original = image.path().to_path_buf();
    let target = destination.join(image.path().file_name().unwrap_or_default());
    if target != original && target.exists() {
        return Err(ImgtagError::InvalidInput(format!(
            "'{}' already exists",
            target.display()
        )));
    }

    let outcome = session.engine.relocate(&mut image, &destination)?;

    if session.quiet {
        println!("{}", image.path().display());
    } else if outcome.is_renamed() {
        println!("{}", output::rename_line(&original, image.path(), session.path_format));
    } else {
        println!("Already in {}", output::format_path(&destination, session.path_format));
    }
    Ok(())
}

/// Execute the open command - show the image's folder in the file manager
///
/// # Errors
/// Returns an error if the file cannot be accessed or no opener is available
pub fn open(file: &Path, quiet: bool) -> Result<()> {
    let image = resolve_image(file)?;
    let folder = image.directory();

    open::that(folder)?;
    if !quiet {
        println!("Opened {}", folder.display());
    }
    Ok(())
}
