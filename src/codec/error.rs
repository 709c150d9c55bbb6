//! Name codec error types

use thiserror::Error;

/// Errors raised while decoding or encoding tags in a file name
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The name has no "." so there is no extension boundary to work against
    #[error("File name has no extension: {0}")]
    NoExtension(String),

    /// Nothing precedes the extension, as in `.jpg`
    #[error("File name has nothing before its extension: {0}")]
    EmptyStem(String),

    /// The path has no final component or it is not valid UTF-8
    #[error("Invalid file name: {0}")]
    InvalidName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_extension_display() {
        let error = CodecError::NoExtension("README".to_string());
        assert_eq!(error.to_string(), "File name has no extension: README");
    }

    #[test]
    fn test_empty_stem_display() {
        let error = CodecError::EmptyStem(".jpg".to_string());
        assert_eq!(error.to_string(), "File name has nothing before its extension: .jpg");
    }

    #[test]
    fn test_invalid_name_display() {
        let error = CodecError::InvalidName("/".to_string());
        assert!(error.to_string().contains("Invalid file name"));
    }
}
