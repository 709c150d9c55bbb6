//! Tag and untag commands

use super::{resolve_image, validate_name_part};
use crate::{ImgtagError, output, session::Session};
use std::path::Path;

type Result<T> = std::result::Result<T, ImgtagError>;

/// Execute the tag command - add tags to an image's name
///
/// Tags not yet in the tag set are registered on the way.
///
/// # Errors
/// Returns an error if a tag is invalid, the file cannot be accessed, or a
/// rename fails
pub fn execute(session: &mut Session, file: &Path, tags: &[String]) -> Result<()> {
    if tags.is_empty() {
        return Err(ImgtagError::InvalidInput("No tags provided".into()));
    }
    for tag in tags {
        validate_name_part("tag", tag)?;
    }

    let mut image = resolve_image(file)?;
    let original = image.path().to_path_buf();

    for tag in tags {
        session.engine.add_tag(&mut image, tag)?;
        if session.tags.add(tag.as_str()) && !session.quiet {
            println!("Registered new tag '{tag}'");
        }
    }

    if session.quiet {
        println!("{}", image.path().display());
    } else {
        println!("Tagged with: {}", tags.join(", "));
        println!("{}", output::rename_line(&original, image.path(), session.path_format));
    }
    Ok(())
}

/// Execute the untag command - remove tags from an image's name
///
/// # Errors
/// Returns an error if the file cannot be accessed or a rename fails
pub fn untag(session: &mut Session, file: &Path, tags: &[String]) -> Result<()> {
    if tags.is_empty() {
        return Err(ImgtagError::InvalidInput("No tags provided".into()));
    }

    let mut image = resolve_image(file)?;
    let original = image.path().to_path_buf();
    let mut missing = Vec::new();

    for tag in tags {
        if !session.engine.remove_tag(&mut image, tag)?.is_renamed() {
            missing.push(tag.as_str());
        }
    }

    if session.quiet {
        println!("{}", image.path().display());
        return Ok(());
    }

    if !missing.is_empty() {
        println!("Not tagged with: {}", missing.join(", "));
    }
    if image.path() == original {
        println!("Nothing to remove from {}", output::format_path(&original, session.path_format));
    } else {
        println!("{}", output::rename_line(&original, image.path(), session.path_format));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ImgtagConfig, PathFormat};
    use crate::testing::TestDir;

    fn session_in(dir: &TestDir) -> Session {
        let config = ImgtagConfig {
            tags_file: Some(dir.join("state/tags.txt")),
            log_file: Some(dir.join("state/log.txt")),
            ..ImgtagConfig::default()
        };
        Session::open(config, true, PathFormat::Absolute).unwrap()
    }

    #[test]
    fn test_tag_renames_and_registers() {
        let dir = TestDir::new();
        let mut session = session_in(&dir);
        let file = dir.touch("pics/sunset.jpg");

        execute(&mut session, &file, &["landscape".to_string(), "lovely".to_string()]).unwrap();

        assert!(!file.exists());
        assert!(dir.join("pics/sunset @landscape @lovely.jpg").exists());
        assert_eq!(session.tags.tags(), ["landscape", "lovely"]);
        assert_eq!(session.log().entries().len(), 2);
    }

    #[test]
    fn test_tag_rejects_invalid_tag_before_renaming() {
        let dir = TestDir::new();
        let mut session = session_in(&dir);
        let file = dir.touch("pics/sunset.jpg");

        let result = execute(&mut session, &file, &["ok".to_string(), "bad/tag".to_string()]);
        assert!(matches!(result, Err(ImgtagError::InvalidInput(_))));
        assert!(file.exists());
        assert!(session.tags.tags().is_empty());
    }

    #[test]
    fn test_untag() {
        let dir = TestDir::new();
        let mut session = session_in(&dir);
        let file = dir.touch("pics/sunset @a @b.jpg");

        untag(&mut session, &file, &["a".to_string(), "missing".to_string()]).unwrap();
        assert!(dir.join("pics/sunset @b.jpg").exists());
        assert_eq!(session.log().entries().len(), 1);
    }

    #[test]
    fn test_tag_non_image() {
        let dir = TestDir::new();
        let mut session = session_in(&dir);
        let file = dir.touch("notes.txt");

        let result = execute(&mut session, &file, &["x".to_string()]);
        assert!(matches!(result, Err(ImgtagError::Engine(_))));
        assert!(file.exists());
        assert!(session.tags.tags().is_empty());
    }
}
