//! Error types for dirdiff

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for dirdiff operations
///
/// Every variant aborts the comparison. A content mismatch is never an
/// error; it is reported as a `Verdict`.
#[derive(Debug, Error)]
pub enum DirDiffError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path vanished or never existed
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Permission denied for specific path
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Listing a directory failed
    #[error("Failed to list directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Opening, seeking or reading a file failed
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error (logic checks)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A spawned comparison task panicked or was cancelled
    #[error("Comparison task failed: {0}")]
    Task(String),
}

/// Which filesystem operation an IO error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoContext {
    List,
    Read,
}

impl DirDiffError {
    /// Attach a path to an IO error.
    ///
    /// `NotFound` and `PermissionDenied` collapse into their dedicated
    /// variants; anything else keeps the source error.
    pub fn at(path: &Path, error: std::io::Error, context: IoContext) -> Self {
        match error.kind() {
            ErrorKind::NotFound => DirDiffError::NotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::PermissionDenied => DirDiffError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => match context {
                IoContext::List => DirDiffError::ListDirectory {
                    path: path.to_path_buf(),
                    source: error,
                },
                IoContext::Read => DirDiffError::ReadFile {
                    path: path.to_path_buf(),
                    source: error,
                },
            },
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, DirDiffError::Validation(_) | DirDiffError::Config(_))
    }

    /// Check if this error is related to permissions
    pub fn is_permission_error(&self) -> bool {
        match self {
            DirDiffError::PermissionDenied { .. } => true,
            DirDiffError::Io(e) => e.kind() == ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Check if this error means a path disappeared
    pub fn is_not_found(&self) -> bool {
        match self {
            DirDiffError::NotFound { .. } => true,
            DirDiffError::Io(e) => e.kind() == ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Path the error refers to, when known
    pub fn path(&self) -> Option<&Path> {
        match self {
            DirDiffError::NotFound { path }
            | DirDiffError::PermissionDenied { path }
            | DirDiffError::ListDirectory { path, .. }
            | DirDiffError::ReadFile { path, .. } => Some(path),
            _ => None,
        }
    }
}
