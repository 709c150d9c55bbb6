//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including path display, rename and history lines and the directory tree.

use crate::config::PathFormat;
use crate::index::{DirNode, Entry};
use colored::Colorize;
use std::path::Path;

/// Format a path according to the display mode
#[must_use]
pub fn format_path(path: &Path, format: PathFormat) -> String {
    match format {
        PathFormat::Absolute => path.display().to_string(),
        PathFormat::Relative => {
            if let Ok(cwd) = std::env::current_dir()
                && let Ok(rel_path) = path.strip_prefix(&cwd)
            {
                return rel_path.display().to_string();
            }
            // Fallback to absolute if relative path cannot be computed
            path.display().to_string()
        }
    }
}

/// Format a rename as `from -> to`
#[must_use]
pub fn rename_line(from: &Path, to: &Path, format: PathFormat) -> String {
    format!(
        "  {} -> {}",
        format_path(from, format),
        format_path(to, format).green()
    )
}

/// Format the earlier names of an image, newest first
#[must_use]
pub fn history_lines(names: &[String], quiet: bool) -> Vec<String> {
    if quiet {
        return names.to_vec();
    }
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| format!("  {}. {name}", idx + 1))
        .collect()
}

/// Render a listing as an indented tree
///
/// Quiet mode prints one image path per line instead, for scripting.
#[must_use]
pub fn render_tree(root: &DirNode, format: PathFormat, quiet: bool) -> String {
    let mut out = String::new();

    if quiet {
        for image in root.images() {
            out.push_str(&format_path(&image.path, format));
            out.push('\n');
        }
        return out;
    }

    out.push_str(&format_path(&root.path, format));
    out.push('\n');
    render_children(root, "", &mut out);
    out
}

fn render_children(node: &DirNode, indent: &str, out: &mut String) {
    for (idx, entry) in node.children.iter().enumerate() {
        let is_last = idx == node.children.len() - 1;

        // Box drawing characters for tree visualization
        let branch = if is_last { "└── " } else { "├── " };
        out.push_str(indent);
        out.push_str(branch);

        match entry {
            Entry::Directory(dir) => {
                out.push_str(&file_name(&dir.path));
                out.push_str("/\n");
                let child_indent = format!("{indent}{}", if is_last { "    " } else { "│   " });
                render_children(dir, &child_indent, out);
            }
            Entry::Image(image) => {
                out.push_str(&file_name(&image.path));
                if !image.tags.is_empty() {
                    out.push_str(&format!("  [{}]", image.tags.join(", ")));
                }
                out.push('\n');
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
