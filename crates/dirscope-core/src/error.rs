//! Error taxonomy for inspection and mutation operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while inspecting or mutating a directory.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Entry vanished or never existed.
    #[error("Not found: {path}")]
    NotFound { path: PathBuf },

    /// Create/rename collision.
    #[error("Already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Text read with wrong or unknown encoding.
    #[error("Cannot decode {path}: {message}")]
    DecodeFailure { path: PathBuf, message: String },

    /// Corrupt or non-zip archive.
    #[error("Invalid archive {path}: {message}")]
    InvalidArchive { path: PathBuf, message: String },

    /// A symlink loop was detected during traversal.
    #[error("Filesystem cycle detected at {path}")]
    CycleDetected { path: PathBuf },

    /// Preview/analysis requested for a disallowed extension.
    #[error("Unsupported file type for {path}: {extension}")]
    UnsupportedType { path: PathBuf, extension: String },

    /// Root path is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InspectError {
    /// Create an I/O error with path context, mapping well-known kinds
    /// onto the taxonomy.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create a decode failure with path context.
    pub fn decode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DecodeFailure {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Kind of non-fatal warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Error reading a file or directory.
    ReadError,
    /// Error reading metadata.
    MetadataError,
    /// Entry disappeared between listing and stat.
    Vanished,
    /// File content could not be decoded as text.
    DecodeFailure,
}

/// Non-fatal warning encountered during an aggregate operation.
///
/// Inspection operations degrade gracefully: one bad entry is reported as
/// a warning and skipped instead of aborting the directory-wide survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a warning for an entry that vanished mid-scan.
    pub fn vanished(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("Entry vanished during scan: {}", path.display()),
            path,
            kind: WarningKind::Vanished,
        }
    }

    /// Create a read error warning.
    pub fn read_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: format!("Read error: {error}"),
            path,
            kind: WarningKind::ReadError,
        }
    }

    /// Create a metadata error warning.
    pub fn metadata_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: format!("Metadata error: {error}"),
            path,
            kind: WarningKind::MetadataError,
        }
    }

    /// Create a decode failure warning.
    pub fn decode_failure(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("Undecodable content: {}", path.display()),
            path,
            kind: WarningKind::DecodeFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_mapping() {
        let err = InspectError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, InspectError::NotFound { .. }));

        let err = InspectError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, InspectError::PermissionDenied { .. }));

        let err = InspectError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "taken"),
        );
        assert!(matches!(err, InspectError::AlreadyExists { .. }));

        let err = InspectError::io(
            "/test/path",
            std::io::Error::other("misc"),
        );
        assert!(matches!(err, InspectError::Io { .. }));
    }

    #[test]
    fn test_warning_creation() {
        let warning = ScanWarning::vanished("/test/gone.txt");
        assert_eq!(warning.kind, WarningKind::Vanished);
        assert!(warning.message.contains("vanished"));
    }
}
