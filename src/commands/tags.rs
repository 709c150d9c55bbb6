//! Tags command - manage the set of known tags

use super::validate_name_part;
use crate::{ImgtagError, cli::TagsCommands, session::Session};
use dialoguer::Confirm;

type Result<T> = std::result::Result<T, ImgtagError>;

/// Execute the tags management command
///
/// # Errors
/// Returns an error if a tag is invalid or user interaction fails
pub fn execute(session: &mut Session, command: &TagsCommands) -> Result<()> {
    match command {
        TagsCommands::List => {
            list_tags(session);
            Ok(())
        }
        TagsCommands::Add { tags } => add_tags(session, tags),
        TagsCommands::Delete { tag, yes } => delete_tag(session, tag, *yes),
    }
}

fn list_tags(session: &Session) {
    let tags = session.tags.tags();

    if tags.is_empty() {
        if !session.quiet {
            println!("No tags registered.");
        }
        return;
    }

    if !session.quiet {
        println!("Known tags:");
    }
    for tag in tags {
        if session.quiet {
            println!("{tag}");
        } else {
            println!("  {tag}");
        }
    }
}

fn add_tags(session: &mut Session, tags: &[String]) -> Result<()> {
    for tag in tags {
        validate_name_part("tag", tag)?;
    }

    for tag in tags {
        let added = session.tags.add(tag.as_str());
        if !session.quiet {
            if added {
                println!("Added tag '{tag}'");
            } else {
                println!("Tag '{tag}' already exists");
            }
        }
    }
    Ok(())
}

fn delete_tag(session: &mut Session, tag: &str, yes: bool) -> Result<()> {
    if !session.tags.contains(tag) {
        if !session.quiet {
            println!("Tag '{tag}' not found.");
        }
        return Ok(());
    }

    if !yes && !confirm(&format!("Forget tag '{tag}'?"), session.quiet)? {
        if !session.quiet {
            println!("Cancelled.");
        }
        return Ok(());
    }

    session.tags.delete(tag);
    if !session.quiet {
        println!("Forgot tag '{tag}'. Images keep it in their names.");
    }
    Ok(())
}

/// Prompt user for yes/no confirmation using dialoguer
fn confirm(prompt: &str, quiet: bool) -> Result<bool> {
    if quiet {
        return Ok(true);
    }

    Confirm::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| ImgtagError::InvalidInput(format!("Confirmation failed: {e}")))
}
