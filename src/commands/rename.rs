//! Rename, history and revert commands

use super::{resolve_image, validate_bare_name, validate_name_part};
use crate::{ImgtagError, codec, output, session::Session};
use dialoguer::Select;
use std::path::Path;

type Result<T> = std::result::Result<T, ImgtagError>;

/// Execute the rename command - replace the base name, keeping tags and extension
///
/// # Errors
/// Returns an error if the name is invalid, the file cannot be accessed, or
/// the rename fails
pub fn execute(session: &mut Session, file: &Path, name: &str) -> Result<()> {
    validate_name_part("name", name)?;
    let mut image = resolve_image(file)?;
    let original = image.path().to_path_buf();

    let new_name = codec::rebase_name(image.path(), name)?;
    let outcome = session.engine.rename(&mut image, &new_name)?;
    report(session, &original, outcome.is_renamed(), image.path());
    Ok(())
}

/// Execute the history command - list the earlier names of an image
///
/// # Errors
/// Returns an error if the file cannot be accessed or the history file
/// cannot be read
pub fn history(session: &Session, file: &Path) -> Result<()> {
    let image = resolve_image(file)?;
    let names = session
        .engine
        .history()
        .try_history(image.directory(), image.bare_name()?)?;

    if names.is_empty() {
        if !session.quiet {
            println!("No earlier names for {}", image.bare_name()?);
        }
        return Ok(());
    }

    if !session.quiet {
        println!("Earlier names of {} (newest first):", image.bare_name()?);
    }
    for line in output::history_lines(&names, session.quiet) {
        println!("{line}");
    }
    Ok(())
}

/// Execute the revert command - go back to an earlier name
///
/// `name` is a complete bare name, tags included, as listed by `history`.
/// Without it the user picks one of the earlier names interactively.
///
/// # Errors
/// Returns an error if the file cannot be accessed, no name is given in
/// quiet mode, the prompt fails, or the rename fails
pub fn revert(session: &mut Session, file: &Path, name: Option<&str>) -> Result<()> {
    let mut image = resolve_image(file)?;
    let original = image.path().to_path_buf();

    let chosen = match name {
        Some(name) => name.to_string(),
        None => {
            if session.quiet {
                return Err(ImgtagError::InvalidInput(
                    "No name given. Pass the earlier name to restore".into(),
                ));
            }
            let names = session
                .engine
                .history()
                .try_history(image.directory(), image.bare_name()?)?;
            if names.is_empty() {
                println!("No earlier names for {}", image.bare_name()?);
                return Ok(());
            }
            match choose(&names)? {
                Some(idx) => names[idx].clone(),
                None => {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
        }
    };
    validate_bare_name(&chosen)?;

    let outcome = session.engine.revert_to(&mut image, &chosen)?;
    report(session, &original, outcome.is_renamed(), image.path());
    Ok(())
}

/// Prompt for one of `names` using dialoguer
fn choose(names: &[String]) -> Result<Option<usize>> {
    Select::new()
        .with_prompt("Revert to")
        .items(names)
        .default(0)
        .interact_opt()
        .map_err(|e| ImgtagError::InvalidInput(format!("Selection failed: {e}")))
}

fn report(session: &Session, original: &Path, renamed: bool, current: &Path) {
    if session.quiet {
        println!("{}", current.display());
    } else if renamed {
        println!("{}", output::rename_line(original, current, session.path_format));
    } else {
        println!("Name unchanged: {}", output::format_path(current, session.path_format));
    }
}
