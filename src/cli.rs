//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for imgtag using the `clap`
//! crate.
//!
//! # Commands
//!
//! - **tree**: List the images below a folder, optionally filtered by tags (default)
//! - **tag** / **untag**: Add or remove tags, renaming the image
//! - **rename**: Replace an image's name, keeping its extension
//! - **history** / **revert**: Show earlier names and go back to one
//! - **move** / **open**: Move an image to another folder, open its folder
//! - **tags**: Manage the set of known tags
//! - **log**: Show the rename log
//! - **config**: Read and change settings

use crate::config::PathFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., default_root)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Tag set management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TagsCommands {
    /// List all known tags
    #[command(visible_alias = "ls")]
    List,

    /// Register new tags
    Add {
        /// Tags to register
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// Forget a tag (images keep it in their names)
    #[command(visible_alias = "rm")]
    Delete {
        /// Tag to forget
        tag: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "imgtag")]
#[command(about = "Tag images by renaming them", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Display absolute paths (overrides config)
    #[arg(long = "absolute", global = true, conflicts_with = "relative")]
    pub absolute: bool,

    /// Display relative paths (overrides config)
    #[arg(long = "relative", global = true, conflicts_with = "absolute")]
    pub relative: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the images below a folder (default)
    #[command(visible_alias = "ls")]
    Tree {
        /// Folder to list (defaults to the configured root)
        #[arg(value_name = "ROOT")]
        root: Option<PathBuf>,

        /// Only show images carrying all of these tags (-t tag1 -t tag2)
        #[arg(short = 't', long = "tag", value_name = "TAG", num_args = 0..)]
        tags: Vec<String>,

        /// Print the listing as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Add tags to an image
    #[command(visible_alias = "t")]
    Tag {
        /// Image to tag
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Tags to add, in order
        #[arg(value_name = "TAGS", required = true)]
        tags: Vec<String>,
    },

    /// Remove tags from an image
    #[command(visible_alias = "u")]
    Untag {
        /// Image to untag
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Tags to remove
        #[arg(value_name = "TAGS", required = true)]
        tags: Vec<String>,
    },

    /// Give an image a new name (extension is kept)
    #[command(visible_alias = "mv")]
    Rename {
        /// Image to rename
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// New name, without extension
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Show the earlier names of an image
    #[command(visible_alias = "h")]
    History {
        /// Image to inspect
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Go back to an earlier name
    Revert {
        /// Image to revert
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Earlier name to restore (prompts when omitted)
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },

    /// Move an image into another folder
    Move {
        /// Image to move
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Destination folder
        #[arg(value_name = "DIR")]
        directory: PathBuf,
    },

    /// Open the folder containing an image
    Open {
        /// Image whose folder to open
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Manage the set of known tags
    Tags {
        #[command(subcommand)]
        command: TagsCommands,
    },

    /// Show the rename log, newest first
    Log {
        /// Only show the newest N entries
        #[arg(short = 'n', long = "limit", value_name = "N")]
        limit: Option<usize>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Tree if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tree {
            root: None,
            tags: Vec::new(),
            json: false,
        })
    }

    /// Helper method to get the path format override from global flags
    #[must_use]
    pub const fn get_path_format(&self) -> Option<PathFormat> {
        if self.absolute {
            Some(PathFormat::Absolute)
        } else if self.relative {
            Some(PathFormat::Relative)
        } else {
            None
        }
    }
}
