//! Tag encoding inside file names
//!
//! Tags live in the file name itself, each one introduced by the two-character
//! marker `" @"` and placed between the base name and the extension:
//!
//! ```text
//! sunset @landscape @lovely.jpg
//! ^^^^^^ ^^^^^^^^^^ ^^^^^^^ ^^^
//! base   tag        tag     extension
//! ```
//!
//! Everything here is a pure string transformation. Nothing touches the
//! filesystem; the engine decides when a computed name becomes a rename.

pub mod error;

pub use error::CodecError;

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, CodecError>;

/// Marker that introduces every tag in a file name
pub const TAG_MARKER: &str = " @";

/// Extensions recognized as images (matched case-sensitively)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["bmp", "jpg", "jpeg", "gif", "png"];

/// Structured view of an image file name
///
/// Decoding and re-encoding are inverse as long as no tag contains the
/// marker itself. Duplicate tags are kept as they appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageName {
    pub base: String,
    pub tags: Vec<String>,
    pub extension: String,
}

impl ImageName {
    /// Create a name from its parts
    #[must_use]
    pub fn new(base: impl Into<String>, tags: Vec<String>, extension: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            tags,
            extension: extension.into(),
        }
    }

    /// Split a file name (no directory) into base, tags and extension
    ///
    /// # Errors
    ///
    /// Returns `CodecError::NoExtension` if the name contains no ".", or
    /// `CodecError::EmptyStem` if nothing precedes it.
    ///
    /// # Examples
    /// ```
    /// # use imgtag::codec::ImageName;
    /// let name = ImageName::parse("sunset @landscape.jpg").unwrap();
    /// assert_eq!(name.base, "sunset");
    /// assert_eq!(name.tags, vec!["landscape".to_string()]);
    /// assert_eq!(name.extension, "jpg");
    /// ```
    pub fn parse(file_name: &str) -> Result<Self> {
        let (stem, extension) = split_extension(file_name)?;
        let mut segments = stem.split(TAG_MARKER);
        let base = segments.next().unwrap_or_default().to_string();
        let tags = segments.map(str::to_string).collect();

        Ok(Self {
            base,
            tags,
            extension: extension.to_string(),
        })
    }

    /// The name without its extension
    #[must_use]
    pub fn stem(&self) -> String {
        let mut stem = self.base.clone();
        for tag in &self.tags {
            stem.push_str(TAG_MARKER);
            stem.push_str(tag);
        }
        stem
    }

    /// Render the full file name
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{}.{}", self.stem(), self.extension)
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Decode the ordered tags of a file name or path
///
/// Only the final path component is inspected, and decoding stops at the
/// extension boundary (the last ".").
///
/// # Errors
///
/// Returns `CodecError::NoExtension` if the name has no extension, or
/// `CodecError::InvalidName` if the path has no usable file name.
///
/// # Examples
/// ```
/// # use imgtag::codec::decode_tags;
/// let tags = decode_tags("photos/sunset @landscape @lovely.jpg").unwrap();
/// assert_eq!(tags, vec!["landscape".to_string(), "lovely".to_string()]);
/// ```
pub fn decode_tags(name: impl AsRef<Path>) -> Result<Vec<String>> {
    let file_name = file_name_of(name.as_ref())?;
    Ok(ImageName::parse(file_name)?.tags)
}

/// Text between the first marker and the next marker (or the end)
///
/// Returns an empty string when the name carries no marker.
#[must_use]
pub fn first_tag(name: &str) -> &str {
    name.split_once(TAG_MARKER).map_or("", |(_, rest)| {
        rest.split_once(TAG_MARKER).map_or(rest, |(tag, _)| tag)
    })
}

/// Compute the path with `tag` appended right before the extension
///
/// No duplicate check is made: adding a tag the name already carries adds
/// it a second time.
///
/// # Errors
///
/// Returns `CodecError` if the file name cannot be decoded.
pub fn add_tag(path: &Path, tag: &str) -> Result<PathBuf> {
    let file_name = file_name_of(path)?;
    let (stem, extension) = split_extension(file_name)?;
    Ok(path.with_file_name(format!("{stem}{TAG_MARKER}{tag}.{extension}")))
}

/// Compute the path with the first literal `" @" + tag` removed from the name
///
/// A tag that is not present leaves the path unchanged.
///
/// # Errors
///
/// Returns `CodecError` if the file name cannot be decoded.
pub fn remove_tag(path: &Path, tag: &str) -> Result<PathBuf> {
    let file_name = file_name_of(path)?;
    let (stem, extension) = split_extension(file_name)?;
    let stem = stem.replacen(&format!("{TAG_MARKER}{tag}"), "", 1);
    Ok(path.with_file_name(format!("{stem}.{extension}")))
}

/// Compute the path with the whole bare name replaced by `new_base`
///
/// Directory and extension are kept. Tags encoded in the old name are
/// dropped unless `new_base` spells them out again.
///
/// # Errors
///
/// Returns `CodecError` if the file name cannot be decoded.
pub fn rename(path: &Path, new_base: &str) -> Result<PathBuf> {
    let file_name = file_name_of(path)?;
    let (_, extension) = split_extension(file_name)?;
    Ok(path.with_file_name(format!("{new_base}.{extension}")))
}

/// Bare name with the base replaced by `new_base` and the tags of `path` kept
///
/// # Errors
///
/// Returns `CodecError` if the file name cannot be decoded.
///
/// # Examples
/// ```
/// # use imgtag::codec::rebase_name;
/// # use std::path::Path;
/// let name = rebase_name(Path::new("IMG_0001 @sky @red.png"), "sunset").unwrap();
/// assert_eq!(name, "sunset @sky @red");
/// ```
pub fn rebase_name(path: &Path, new_base: &str) -> Result<String> {
    let mut name = ImageName::parse(file_name_of(path)?)?;
    name.base = new_base.to_string();
    Ok(name.stem())
}

/// File name without directory and extension
///
/// # Errors
///
/// Returns `CodecError` if the file name cannot be decoded.
///
/// # Examples
/// ```
/// # use imgtag::codec::bare_name;
/// # use std::path::Path;
/// assert_eq!(bare_name(Path::new("/pics/sunset @sky.png")).unwrap(), "sunset @sky");
/// ```
pub fn bare_name(path: &Path) -> Result<&str> {
    let file_name = file_name_of(path)?;
    split_extension(file_name).map(|(stem, _)| stem)
}

/// Check whether the tags of `name` are a superset of `required`
///
/// # Errors
///
/// Returns `CodecError` if the file name cannot be decoded.
pub fn contains_tags(name: impl AsRef<Path>, required: &[String]) -> Result<bool> {
    let tags = decode_tags(name)?;
    Ok(required.iter().all(|tag| tags.contains(tag)))
}

/// Whether the extension after the last "." is a recognized image type
///
/// A name with nothing before the extension (`.jpg`) is not an image.
#[must_use]
pub fn is_image(path: &Path) -> bool {
    file_name_of(path)
        .and_then(split_extension)
        .is_ok_and(|(_, extension)| IMAGE_EXTENSIONS.contains(&extension))
}

fn file_name_of(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| CodecError::InvalidName(path.display().to_string()))
}

fn split_extension(file_name: &str) -> Result<(&str, &str)> {
    let (stem, extension) = file_name
        .rsplit_once('.')
        .ok_or_else(|| CodecError::NoExtension(file_name.to_string()))?;
    if stem.is_empty() {
        return Err(CodecError::EmptyStem(file_name.to_string()));
    }
    Ok((stem, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_add_tag_before_extension() {
        let path = add_tag(Path::new("sunset.jpg"), "landscape").unwrap();
        assert_eq!(path, PathBuf::from("sunset @landscape.jpg"));

        let path = add_tag(&path, "lovely").unwrap();
        assert_eq!(path, PathBuf::from("sunset @landscape @lovely.jpg"));
        assert_eq!(decode_tags(&path).unwrap(), tags(&["landscape", "lovely"]));
    }

    #[test]
    fn test_add_tag_keeps_directory() {
        let path = add_tag(Path::new("/pics/2020/sunset.jpg"), "sky").unwrap();
        assert_eq!(path, PathBuf::from("/pics/2020/sunset @sky.jpg"));
    }

    #[test]
    fn test_add_tag_twice_duplicates() {
        // No dedup: a repeated tag is encoded again
        let once = add_tag(Path::new("a.png"), "x").unwrap();
        let twice = add_tag(&once, "x").unwrap();
        assert_eq!(twice, PathBuf::from("a @x @x.png"));
        assert_eq!(decode_tags(&twice).unwrap(), tags(&["x", "x"]));
    }

    #[test]
    fn test_remove_tag() {
        let path = remove_tag(Path::new("sunset @landscape.jpg"), "landscape").unwrap();
        assert_eq!(path, PathBuf::from("sunset.jpg"));
    }

    #[test]
    fn test_remove_tag_middle() {
        let path = remove_tag(Path::new("sunset @a @b @c.gif"), "b").unwrap();
        assert_eq!(path, PathBuf::from("sunset @a @c.gif"));
    }

    #[test]
    fn test_remove_absent_tag_is_unchanged() {
        let path = remove_tag(Path::new("dir/sunset @a.jpg"), "zzz").unwrap();
        assert_eq!(path, PathBuf::from("dir/sunset @a.jpg"));
    }

    #[test]
    fn test_remove_tag_is_idempotent() {
        let original = Path::new("sunset @landscape @lovely.jpg");
        let once = remove_tag(original, "landscape").unwrap();
        let twice = remove_tag(&once, "landscape").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_tag_only_first_occurrence() {
        let path = remove_tag(Path::new("a @x @x.png"), "x").unwrap();
        assert_eq!(path, PathBuf::from("a @x.png"));
    }

    #[test]
    fn test_remove_tag_never_touches_extension() {
        let path = remove_tag(Path::new("a @b.jpg"), "b.jpg").unwrap();
        assert_eq!(path, PathBuf::from("a @b.jpg"));
    }

    #[test]
    fn test_rename_keeps_extension_drops_tags() {
        let path = rename(Path::new("/p/sunset @sky.jpg"), "lovelysunset").unwrap();
        assert_eq!(path, PathBuf::from("/p/lovelysunset.jpg"));
    }

    #[test]
    fn test_decode_without_tags() {
        assert!(decode_tags("sunset.jpg").unwrap().is_empty());
    }

    #[test]
    fn test_decode_stops_at_extension() {
        assert_eq!(decode_tags("a @b.c @d.png").unwrap(), tags(&["b.c", "d"]));
    }

    #[test]
    fn test_no_extension_rejected() {
        assert_eq!(
            decode_tags("sunset @sky"),
            Err(CodecError::NoExtension("sunset @sky".to_string()))
        );
        assert!(add_tag(Path::new("sunset"), "x").is_err());
        assert!(remove_tag(Path::new("sunset"), "x").is_err());
        assert!(rename(Path::new("sunset"), "x").is_err());
    }

    #[test]
    fn test_empty_stem_rejected() {
        assert_eq!(
            bare_name(Path::new("/pics/.jpg")),
            Err(CodecError::EmptyStem(".jpg".to_string()))
        );
        assert!(add_tag(Path::new(".png"), "x").is_err());
        assert_eq!(
            rename(Path::new("/pics/a.png"), "").unwrap(),
            PathBuf::from("/pics/.png")
        );
        assert!(bare_name(&rename(Path::new("/pics/a.png"), "").unwrap()).is_err());
    }

    #[test]
    fn test_first_tag() {
        assert_eq!(first_tag("sunset @landscape @lovely"), "landscape");
        assert_eq!(first_tag("sunset @landscape"), "landscape");
        assert_eq!(first_tag("sunset"), "");
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            ImageName::new("sunset", tags(&[]), "jpg"),
            ImageName::new("sunset", tags(&["a", "b", "a"]), "png"),
            ImageName::new("my.holiday", tags(&["beach"]), "jpeg"),
            ImageName::new("x", tags(&["", "y"]), "bmp"),
        ];
        for name in cases {
            let encoded = name.encode();
            assert_eq!(decode_tags(&encoded).unwrap(), name.tags, "{encoded}");
            assert_eq!(ImageName::parse(&encoded).unwrap(), name);
        }
    }

    #[test]
    fn test_rebase_name() {
        assert_eq!(rebase_name(Path::new("/p/a @x @x.jpg"), "b").unwrap(), "b @x @x");
        assert_eq!(rebase_name(Path::new("plain.gif"), "other").unwrap(), "other");
        assert!(rebase_name(Path::new("noext"), "b").is_err());
    }

    #[test]
    fn test_bare_name() {
        assert_eq!(bare_name(Path::new("/a/b/sunset.jpg")).unwrap(), "sunset");
        assert_eq!(bare_name(Path::new("x.tar.gz")).unwrap(), "x.tar");
    }

    #[test]
    fn test_contains_tags() {
        let required = tags(&["landscape"]);
        assert!(contains_tags("sunset @landscape.jpg", &required).unwrap());
        assert!(!contains_tags("sunset.jpg", &required).unwrap());
        assert!(contains_tags("sunset.jpg", &[]).unwrap());
    }

    #[test]
    fn test_is_image() {
        for name in ["a.bmp", "a.jpg", "a.jpeg", "a.gif", "a @t.png"] {
            assert!(is_image(Path::new(name)), "{name}");
        }
        for name in ["a.txt", "a.JPG", "history.txt", "jpg", "a.jpg.bak", ".jpg"] {
            assert!(!is_image(Path::new(name)), "{name}");
        }
    }
}
