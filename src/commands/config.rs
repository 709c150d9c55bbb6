//! Config command - read and change settings

use crate::{ImgtagError, cli::ConfigCommands, config::ImgtagConfig};

type Result<T> = std::result::Result<T, ImgtagError>;

/// Execute the config command, saving after a `set`
///
/// # Errors
/// Returns an error if the setting is malformed or unknown, or the
/// configuration cannot be saved
pub fn execute(mut config: ImgtagConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = apply_setting(&mut config, setting)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get_value(key)?);
        }
    }
    Ok(())
}

/// Apply a `key=value` setting to `config` without saving it
///
/// # Errors
/// Returns `ImgtagError` if the setting has no `=`, the key is unknown, or
/// the value is invalid for the key
pub fn apply_setting<'a>(config: &mut ImgtagConfig, setting: &'a str) -> Result<(&'a str, &'a str)> {
    let (key, value) = setting.split_once('=').ok_or_else(|| {
        ImgtagError::InvalidInput("Invalid format. Use: imgtag config set key=value".into())
    })?;
    let (key, value) = (key.trim(), value.trim());

    config.set_value(key, value)?;
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathFormat;
    use std::path::PathBuf;

    #[test]
    fn test_apply_setting() {
        let mut config = ImgtagConfig::default();

        assert_eq!(apply_setting(&mut config, "quiet = true").unwrap(), ("quiet", "true"));
        apply_setting(&mut config, "default_root=/pics").unwrap();
        apply_setting(&mut config, "path_format=relative").unwrap();

        assert!(config.quiet);
        assert_eq!(config.default_root, Some(PathBuf::from("/pics")));
        assert_eq!(config.path_format, PathFormat::Relative);
    }

    #[test]
    fn test_apply_setting_errors() {
        let mut config = ImgtagConfig::default();

        assert!(matches!(
            apply_setting(&mut config, "quiet"),
            Err(ImgtagError::InvalidInput(_))
        ));
        assert!(matches!(
            apply_setting(&mut config, "colour=red"),
            Err(ImgtagError::ConfigError(_))
        ));
        assert_eq!(config, ImgtagConfig::default());
    }
}
