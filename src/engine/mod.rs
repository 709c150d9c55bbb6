//! Rename transactions driven by tag edits
//!
//! Each operation computes a new name with the codec, records the
//! transition in the directory's history file and only then moves the file.
//! The move coming last keeps existing history files compatible: a name is
//! always in the history before it appears on disk.
//!
//! If the move fails the history entry is rolled back from a snapshot when
//! possible, and `EngineError::MoveFailed` is returned. History failures on
//! their own never stop a rename.

pub mod error;

pub use error::EngineError;

use crate::codec::{self, CodecError};
use crate::history::{HistorySnapshot, HistoryStore};
use std::fs;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, EngineError>;

/// Receiver notified after every successful rename or move
pub trait RenameSink {
    /// Called once the file now lives at `to`
    fn renamed(&mut self, from: &Path, to: &Path);
}

impl RenameSink for () {
    fn renamed(&mut self, _from: &Path, _to: &Path) {}
}

/// The engine's reference to one image on disk
///
/// Engine operations update the path in place, so the same value can be
/// used for a sequence of edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    path: PathBuf,
}

impl ImageFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Current path of the image
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the image (`.` for a bare relative name)
    #[must_use]
    pub fn directory(&self) -> &Path {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Name without directory and extension
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the file name cannot be decoded.
    pub fn bare_name(&self) -> std::result::Result<&str, CodecError> {
        codec::bare_name(&self.path)
    }

    /// Tags currently encoded in the name
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the file name cannot be decoded.
    pub fn tags(&self) -> std::result::Result<Vec<String>, CodecError> {
        codec::decode_tags(&self.path)
    }

    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Result of an engine operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was moved
    Renamed { from: PathBuf, to: PathBuf },
    /// The computed name equals the current one; nothing was touched
    Unchanged(PathBuf),
}

impl RenameOutcome {
    /// Path of the image after the operation
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Renamed { to, .. } => to,
            Self::Unchanged(path) => path,
        }
    }

    #[must_use]
    pub const fn is_renamed(&self) -> bool {
        matches!(self, Self::Renamed { .. })
    }
}

/// Applies tag edits and renames to image files
pub struct TagEngine<S = ()> {
    history: HistoryStore,
    sink: S,
}

impl TagEngine<()> {
    /// Engine without a rename sink
    #[must_use]
    pub const fn new(history: HistoryStore) -> Self {
        Self { history, sink: () }
    }
}

impl<S: RenameSink> TagEngine<S> {
    /// Engine reporting every rename to `sink`
    pub const fn with_sink(history: HistoryStore, sink: S) -> Self {
        Self { history, sink }
    }

    #[must_use]
    pub const fn history(&self) -> &HistoryStore {
        &self.history
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Earlier names of `image`, newest first
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Codec` if the image name cannot be decoded.
    pub fn history_of(&self, image: &ImageFile) -> Result<Vec<String>> {
        Ok(self.history.history(image.directory(), image.bare_name()?))
    }

    /// Append `tag` to the image name
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the file is not an image, its name cannot be
    /// decoded, or the rename fails.
    pub fn add_tag(&mut self, image: &mut ImageFile, tag: &str) -> Result<RenameOutcome> {
        ensure_image(image)?;
        let target = codec::add_tag(image.path(), tag)?;
        self.apply(image, target)
    }

    /// Remove the first occurrence of `tag` from the image name
    ///
    /// An absent tag yields `RenameOutcome::Unchanged`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the file is not an image, its name cannot be
    /// decoded, or the rename fails.
    pub fn remove_tag(&mut self, image: &mut ImageFile, tag: &str) -> Result<RenameOutcome> {
        ensure_image(image)?;
        let target = codec::remove_tag(image.path(), tag)?;
        self.apply(image, target)
    }

    /// Replace the bare name of the image with `new_base`
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the file is not an image, its name cannot be
    /// decoded, or the rename fails.
    pub fn rename(&mut self, image: &mut ImageFile, new_base: &str) -> Result<RenameOutcome> {
        ensure_image(image)?;
        let target = codec::rename(image.path(), new_base)?;
        self.apply(image, target)
    }

    /// Give the image back one of its earlier bare names
    ///
    /// The revert is itself recorded, so it can be undone the same way.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the file is not an image, its name cannot be
    /// decoded, or the rename fails.
    pub fn revert_to(&mut self, image: &mut ImageFile, history_name: &str) -> Result<RenameOutcome> {
        self.rename(image, history_name)
    }

    /// Move the image into `directory`, keeping its file name
    ///
    /// History files are per directory, so the move is not recorded in
    /// either of them. The sink is still notified.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the file is not an image or the move fails.
    pub fn relocate(&mut self, image: &mut ImageFile, directory: &Path) -> Result<RenameOutcome> {
        ensure_image(image)?;
        let file_name = image
            .path()
            .file_name()
            .ok_or_else(|| CodecError::InvalidName(image.path().display().to_string()))?;
        let target = directory.join(file_name);
        if target == image.path {
            return Ok(RenameOutcome::Unchanged(target));
        }

        self.move_file(image, target, None)
    }

    fn apply(&mut self, image: &mut ImageFile, target: PathBuf) -> Result<RenameOutcome> {
        if target == image.path {
            return Ok(RenameOutcome::Unchanged(target));
        }

        let old_name = image.bare_name()?;
        let new_name = codec::bare_name(&target)?;
        let snapshot = match self
            .history
            .try_record_rename(image.directory(), old_name, new_name)
        {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!("Renaming without history: {e}");
                None
            }
        };

        self.move_file(image, target, snapshot)
    }

    fn move_file(
        &mut self,
        image: &mut ImageFile,
        target: PathBuf,
        snapshot: Option<HistorySnapshot>,
    ) -> Result<RenameOutcome> {
        if let Err(source) = fs::rename(&image.path, &target) {
            if let Some(snapshot) = snapshot
                && let Err(e) = self.history.restore(snapshot)
            {
                log::warn!("History entry left behind after failed move: {e}");
            }
            return Err(EngineError::MoveFailed {
                from: image.path.clone(),
                to: target,
                source,
            });
        }

        let from = std::mem::replace(&mut image.path, target.clone());
        log::info!("Renamed {} -> {}", from.display(), target.display());
        self.sink.renamed(&from, &target);

        Ok(RenameOutcome::Renamed { from, to: target })
    }
}

fn ensure_image(image: &ImageFile) -> Result<()> {
    if codec::is_image(image.path()) {
        Ok(())
    } else {
        Err(EngineError::NotAnImage(image.path().to_path_buf()))
    }
}
