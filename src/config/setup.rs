//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when imgtag is run for the first time.

use super::{ImgtagConfig, PathFormat};
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for the default image folder
///
/// 1. Prompts for the folder listed by default (default: the system
///    pictures directory, or the current directory)
/// 2. Creates and saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<ImgtagConfig, ConfigError> {
    println!("Welcome to imgtag! Let's pick the folder holding your images.\n");

    let suggested = dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .to_string_lossy()
        .to_string();

    let root: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Image folder")
        .default(suggested)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = ImgtagConfig {
        default_root: Some(PathBuf::from(root)),
        quiet: false,
        path_format: PathFormat::Absolute,
        ..ImgtagConfig::default()
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

