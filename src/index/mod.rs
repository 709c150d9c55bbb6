//! Directory listings of tagged images
//!
//! Builds a snapshot tree of a directory: image files are leaves carrying
//! their decoded tags, and a subdirectory only appears when something below
//! it made it into the listing. Children are sorted by file name.
//!
//! Nothing here writes to disk.

pub mod error;

pub use error::IndexError;

use crate::codec;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, IndexError>;

/// An image leaf of the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    pub path: PathBuf,
    pub tags: Vec<String>,
}

/// A node of the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Directory(DirNode),
    Image(ImageEntry),
}

/// A directory and the entries kept below it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirNode {
    pub path: PathBuf,
    pub children: Vec<Entry>,
}

impl DirNode {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            children: Vec::new(),
        }
    }

    /// Whether nothing was kept below this directory
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of image leaves below this directory
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images().count()
    }

    /// Image leaves below this directory, depth first in listing order
    #[must_use]
    pub fn images(&self) -> Images<'_> {
        Images {
            stack: vec![self.children.iter()],
        }
    }
}

/// Depth-first iterator over the image leaves of a `DirNode`
pub struct Images<'a> {
    stack: Vec<std::slice::Iter<'a, Entry>>,
}

impl<'a> Iterator for Images<'a> {
    type Item = &'a ImageEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.stack.last_mut()?.next() {
                Some(entry) => entry,
                None => {
                    self.stack.pop();
                    continue;
                }
            };
            match entry {
                Entry::Image(image) => return Some(image),
                Entry::Directory(dir) => self.stack.push(dir.children.iter()),
            }
        }
    }
}

/// List every image below `root`
///
/// # Errors
///
/// Returns `IndexError` if `root` is not a readable directory.
pub fn build_tree(root: &Path) -> Result<DirNode> {
    build(root, None)
}

/// List the images below `root` whose tags include all of `required`
///
/// Directories left without any matching image are pruned.
///
/// # Errors
///
/// Returns `IndexError` if `root` is not a readable directory.
pub fn build_filtered_tree(root: &Path, required: &[String]) -> Result<DirNode> {
    build(root, Some(required))
}

fn build(root: &Path, required: Option<&[String]>) -> Result<DirNode> {
    if !root.is_dir() {
        return Err(IndexError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|source| IndexError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    Ok(visit(root, required))
}

fn visit(dir: &Path, required: Option<&[String]>) -> DirNode {
    let mut node = DirNode::new(dir);
    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping entry in {}: {e}", dir.display());
                continue;
            }
        };
        let path = entry.path();

        if entry.file_type().is_dir() {
            let child = visit(path, required);
            if child.images().next().is_some() {
                node.children.push(Entry::Directory(child));
            }
        } else if entry.file_type().is_file() && codec::is_image(path) {
            let tags = match codec::decode_tags(path) {
                Ok(tags) => tags,
                Err(e) => {
                    log::warn!("Skipping {}: {e}", path.display());
                    continue;
                }
            };
            if let Some(required) = required
                && !codec::contains_tags(path, required).unwrap_or(false)
            {
                continue;
            }
            node.children.push(Entry::Image(ImageEntry {
                path: path.to_path_buf(),
                tags,
            }));
        }
    }

    node
}
