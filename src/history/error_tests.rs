//! Unit tests for history error types

#[cfg(test)]
mod tests {
    use crate::history::error::HistoryError;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_unavailable_display() {
        let error = HistoryError::unavailable(
            "/pics/history.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let display = error.to_string();
        assert!(display.contains("History unavailable"));
        assert!(display.contains("/pics/history.txt"));
        assert!(display.contains("denied"));
    }

    #[test]
    fn test_unavailable_source() {
        let error = HistoryError::unavailable(
            "history.txt",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        let source = error.source().expect("io error should be the source");
        assert_eq!(source.to_string(), "gone");
    }

    #[test]
    fn test_unavailable_debug() {
        let error = HistoryError::unavailable("h.txt", io::Error::other("boom"));
        let debug = format!("{error:?}");
        assert!(debug.contains("Unavailable"));
        assert!(debug.contains("h.txt"));
    }
}
