//! imgtag CLI application entry point
//!
//! Tags live in image file names: `sunset @landscape @lovely.jpg` carries the
//! tags `landscape` and `lovely`. Tagging renames the file, and every name an
//! image has held is kept in a `history.txt` next to it so it can be restored.
//!
//! # Usage
//!
//! ```bash
//! # List images below the configured folder (default command)
//! imgtag
//! imgtag ls ~/Pictures -t landscape
//!
//! # Tag and untag
//! imgtag tag sunset.jpg landscape lovely
//! imgtag untag "sunset @landscape @lovely.jpg" lovely
//!
//! # Earlier names
//! imgtag history "sunset @landscape.jpg"
//! imgtag revert "sunset @landscape.jpg"
//!
//! # Quiet mode (only output results)
//! imgtag -q ls -t landscape
//! ```
//!
//! # Configuration
//!
//! On first run, imgtag will prompt for the image folder. Configuration is
//! stored in the user's config directory (`~/.config/imgtag/config.toml` on
//! Linux). Set `RUST_LOG=info` to see every rename as it happens.

use imgtag::{
    ImgtagError,
    cli::{Cli, Commands},
    commands,
    config::{ImgtagConfig, PathFormat},
    session::Session,
};

type Result<T> = std::result::Result<T, ImgtagError>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_args();
    let config = ImgtagConfig::load_or_setup()?;

    let quiet = cli.quiet || config.quiet;
    let path_format = cli.get_path_format().unwrap_or(config.path_format);

    match cli.get_command() {
        Commands::Config { command } => commands::config(config, &command, quiet),
        Commands::Tree { root, tags, json } => {
            commands::tree(&config, root, &tags, json, quiet, path_format)
        }
        Commands::Open { file } => commands::open(&file, quiet),
        Commands::Tag { file, tags } => {
            with_session(config, quiet, path_format, |s| commands::tag(s, &file, &tags))
        }
        Commands::Untag { file, tags } => {
            with_session(config, quiet, path_format, |s| commands::untag(s, &file, &tags))
        }
        Commands::Rename { file, name } => {
            with_session(config, quiet, path_format, |s| commands::rename(s, &file, &name))
        }
        Commands::History { file } => {
            with_session(config, quiet, path_format, |s| commands::history(s, &file))
        }
        Commands::Revert { file, name } => with_session(config, quiet, path_format, |s| {
            commands::revert(s, &file, name.as_deref())
        }),
        Commands::Move { file, directory } => with_session(config, quiet, path_format, |s| {
            commands::relocate(s, &file, &directory)
        }),
        Commands::Tags { command } => {
            with_session(config, quiet, path_format, |s| commands::tags(s, &command))
        }
        Commands::Log { limit } => with_session(config, quiet, path_format, |s| {
            commands::log(s, limit);
            Ok(())
        }),
    }
}

/// Run a command against the tag set and rename log, then write both back
///
/// The stores are flushed even when the command fails, so renames that did
/// happen stay in the log.
fn with_session<F>(config: ImgtagConfig, quiet: bool, path_format: PathFormat, command: F) -> Result<()>
where
    F: FnOnce(&mut Session) -> Result<()>,
{
    let mut session = Session::open(config, quiet, path_format)?;
    let result = command(&mut session);
    let flushed = session.flush();
    result?;
    flushed
}
