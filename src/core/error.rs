//! Error types for the reconciliation engine.
//!
//! Nothing here is fatal: toggle failures are logged and ignored, a missing
//! tree is retried, clipboard failures surface as a transient button label,
//! and unresolved share-token entries are silently skipped. Errors therefore
//! carry just enough context for a console diagnostic.

use std::fmt;

/// Failures of a single toggle operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    /// The path has no known file entry. A caller bug or a stale reference
    /// into a re-rendered tree; never surfaced to the user.
    UnknownPath(String),
}

impl fmt::Display for ToggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPath(path) => write!(f, "no known file entry for '{}'", path),
        }
    }
}

impl std::error::Error for ToggleError {}

/// Failures writing the per-page snapshot to sessionStorage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// sessionStorage not available.
    StorageUnavailable,
    /// Failed to serialize the hidden set to JSON.
    SerializationFailed,
    /// Failed to write to storage (quota, private mode).
    WriteFailed,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageUnavailable => write!(f, "sessionStorage not available"),
            Self::SerializationFailed => write!(f, "failed to serialize hidden set"),
            Self::WriteFailed => write!(f, "failed to write to sessionStorage"),
        }
    }
}

impl std::error::Error for SnapshotError {}
