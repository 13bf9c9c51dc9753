//! Error type definitions

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please choose an image")]
    NoFileSelected,

    #[error("An analysis is already running")]
    AnalysisPending,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_selected_display() {
        let error = Error::NoFileSelected;
        assert_eq!(format!("{}", error), "Please choose an image");
    }

    #[test]
    fn test_analysis_pending_display() {
        let error = Error::AnalysisPending;
        assert_eq!(format!("{}", error), "An analysis is already running");
    }

    #[test]
    fn test_error_display_parse() {
        let error = Error::Parse("unexpected token".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Parse error: unexpected token");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Parse("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Parse"));
        assert!(debug.contains("test"));
    }
}
