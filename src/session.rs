//! State shared by the commands of one invocation
//!
//! The tag set and the rename log are loaded when the session opens and
//! written back by `flush`, which `main` calls once the command is done
//! (whether or not it succeeded).

use crate::config::{ImgtagConfig, PathFormat};
use crate::engine::TagEngine;
use crate::history::HistoryStore;
use crate::journal::{RenameLog, TagStore};
use crate::ImgtagError;

type Result<T> = std::result::Result<T, ImgtagError>;

/// Loaded stores plus output preferences
pub struct Session {
    pub config: ImgtagConfig,
    pub tags: TagStore,
    pub engine: TagEngine<RenameLog>,
    pub quiet: bool,
    pub path_format: PathFormat,
}

impl Session {
    /// Load the tag set and rename log named by `config`
    ///
    /// # Errors
    ///
    /// Returns `ImgtagError` if the store locations cannot be determined or
    /// an existing store cannot be read.
    pub fn open(config: ImgtagConfig, quiet: bool, path_format: PathFormat) -> Result<Self> {
        let tags = TagStore::open(config.tags_path()?)?;
        let log = RenameLog::open(config.log_path()?)?;

        Ok(Self {
            config,
            tags,
            engine: TagEngine::with_sink(HistoryStore::new(), log),
            quiet,
            path_format,
        })
    }

    /// Rename log collected so far
    #[must_use]
    pub fn log(&self) -> &RenameLog {
        self.engine.sink()
    }

    /// Write the tag set and the rename log back to disk
    ///
    /// # Errors
    ///
    /// Returns `ImgtagError::Journal` if either store cannot be written. Both
    /// writes are attempted.
    pub fn flush(&self) -> Result<()> {
        let tags = self.tags.flush();
        let log = self.log().flush();
        tags?;
        log?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ImageFile;
    use crate::testing::TestDir;

    fn config_in(dir: &TestDir) -> ImgtagConfig {
        ImgtagConfig {
            tags_file: Some(dir.join("state/tags.txt")),
            log_file: Some(dir.join("state/log.txt")),
            ..ImgtagConfig::default()
        }
    }

    #[test]
    fn test_flush_persists_tags_and_log() {
        let dir = TestDir::new();
        let mut session = Session::open(config_in(&dir), true, PathFormat::Absolute).unwrap();

        session.tags.add("landscape");
        let mut image = ImageFile::new(dir.touch("pics/sunset.jpg"));
        session.engine.add_tag(&mut image, "landscape").unwrap();
        session.flush().unwrap();

        let reopened = Session::open(config_in(&dir), true, PathFormat::Absolute).unwrap();
        assert_eq!(reopened.tags.tags(), ["landscape"]);
        assert_eq!(reopened.log().entries().len(), 1);
        assert!(reopened.log().entries()[0].starts_with("sunset--->-sunset @landscape"));
    }
}
