//! Tree command - list images below a folder

use crate::{ImgtagError, config::{ImgtagConfig, PathFormat}, index, output};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ImgtagError>;

/// Execute the tree command
///
/// With `tags` the listing only keeps images carrying all of them.
///
/// # Errors
/// Returns an error if the root is not a readable directory or the listing
/// cannot be serialized
pub fn execute(
    config: &ImgtagConfig,
    root: Option<PathBuf>,
    tags: &[String],
    json: bool,
    quiet: bool,
    path_format: PathFormat,
) -> Result<()> {
    let root = root.unwrap_or_else(|| config.root());
    let root = root.canonicalize().unwrap_or(root);

    let tree = if tags.is_empty() {
        index::build_tree(&root)?
    } else {
        index::build_filtered_tree(&root, tags)?
    };
    log::debug!("Listed {} image(s) below {}", tree.image_count(), root.display());

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    if tree.is_empty() {
        if !quiet {
            if tags.is_empty() {
                println!("No images found in {}", root.display());
            } else {
                println!("No images tagged with: {}", tags.join(", "));
            }
        }
        return Ok(());
    }

    print!("{}", output::render_tree(&tree, path_format, quiet));
    if !quiet {
        println!("\n{} image(s)", tree.image_count());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDir;

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TestDir::new();
        let result = execute(
            &ImgtagConfig::default(),
            Some(dir.join("nowhere")),
            &[],
            false,
            true,
            PathFormat::Absolute,
        );
        assert!(matches!(result, Err(ImgtagError::Index(_))));
    }

    #[test]
    fn test_configured_root_is_used() {
        let dir = TestDir::new();
        dir.touch("sunset @sky.jpg");
        let config = ImgtagConfig {
            default_root: Some(dir.path().to_path_buf()),
            ..ImgtagConfig::default()
        };

        assert!(execute(&config, None, &["sky".to_string()], false, true, PathFormat::Absolute).is_ok());
        assert!(execute(&config, None, &[], true, true, PathFormat::Absolute).is_ok());
    }
}
