//! Error types for kask operations.
//!
//! [`KaskError`] covers failures that are not tied to the HTTP API: log
//! setup, terminal handling, and an empty dashboard. API failures live in
//! `kask_api::ApiError`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`KaskError`].
pub type Result<T> = std::result::Result<T, KaskError>;

/// Error type for non-network kask operations.
#[derive(Debug, Error)]
pub enum KaskError {
    // =========================================================================
    // I/O Errors
    // =========================================================================
    /// Directory creation failed
    #[error("Failed to create directory: {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Home directory could not be determined
    #[error("Could not determine home directory")]
    HomeNotFound,

    // =========================================================================
    // Dashboard Errors
    // =========================================================================
    /// The dashboard was asked to display zero kegs
    #[error("Nothing on tap")]
    EmptyDashboard,

    // =========================================================================
    // TUI Errors
    // =========================================================================
    /// Terminal initialization failed
    #[error("Terminal initialization failed: {message}")]
    TerminalInit { message: String },

    /// Terminal restore failed
    #[error("Failed to restore terminal: {message}")]
    TerminalRestore { message: String },

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// Internal error (bug in kask)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl KaskError {
    /// Create a terminal initialization error
    pub fn terminal_init(message: impl Into<String>) -> Self {
        Self::TerminalInit {
            message: message.into(),
        }
    }

    /// Create a terminal restore error
    pub fn terminal_restore(message: impl Into<String>) -> Self {
        Self::TerminalRestore {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error should end the program.
    ///
    /// Failing to find or create the log directory is not fatal: the
    /// dashboard runs without a log file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::TerminalInit { .. } | Self::Internal { .. })
    }

    /// Returns actionable guidance for the user
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::DirectoryCreation { .. } | Self::HomeNotFound => {
                Some("Pass --log-dir to write logs somewhere else")
            }
            Self::EmptyDashboard => Some("Check back once a keg has been tapped"),
            Self::TerminalInit { .. } => Some("Try running in a different terminal"),
            Self::TerminalRestore { .. } => Some("Run `reset` if the terminal looks wrong"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_init_error() {
        let err = KaskError::terminal_init("not a tty");
        assert!(err.to_string().contains("not a tty"));
        assert!(err.is_fatal());
        assert_eq!(err.guidance(), Some("Try running in a different terminal"));
    }

    #[test]
    fn test_empty_dashboard_is_not_fatal() {
        let err = KaskError::EmptyDashboard;
        assert!(!err.is_fatal());
        assert!(err.guidance().is_some());
    }

    #[test]
    fn test_directory_creation_keeps_source() {
        let err = KaskError::DirectoryCreation {
            path: "/nope/logs".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/nope/logs"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_missing_home_is_not_fatal() {
        assert!(!KaskError::HomeNotFound.is_fatal());
        assert!(KaskError::internal("boom").is_fatal());
    }

    #[test]
    fn test_terminal_restore_error() {
        let err = KaskError::terminal_restore("raw mode stuck");
        assert!(err.to_string().contains("raw mode stuck"));
        assert!(!err.is_fatal());
        assert!(err.guidance().is_some_and(|hint| hint.contains("reset")));
    }
}
