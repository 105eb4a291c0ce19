//! Error types for the chpath library.
//!
//! Every failure in the cleaning pipeline is entry-local: a bad entry is
//! skipped and reported, never fatal. This module provides the taxonomy of
//! those per-entry rejections, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a chpath error.
///
/// # Examples
///
/// ```
/// use chpath::{Error, Result};
///
/// fn example_operation() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the chpath library.
///
/// Apart from [`Error::Io`], every variant describes why a single search-path
/// entry was rejected during cleaning.
#[derive(Debug, Error)]
pub enum Error {
    /// An entry could not be canonicalized.
    ///
    /// Covers malformed input, broken symlink chains, and `..` sequences
    /// that would escape the filesystem root.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The entry that failed to canonicalize.
        path: PathBuf,
        /// The reason canonicalization failed.
        reason: String,
    },

    /// The entry's target does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The entry's target exists but is not a directory.
    #[error("{} is not a directory", path.display())]
    NotADirectory {
        /// The path that is not a directory.
        path: PathBuf,
    },

    /// The entry resolves to a directory that was already accepted.
    #[error("{} multiply defined", path.display())]
    DuplicateEntry {
        /// The entry as originally written.
        path: PathBuf,
    },

    /// Permission denied accessing an entry's target.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use chpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if the error indicates a duplicate entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use chpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::DuplicateEntry { path: PathBuf::from("/usr/bin") };
    /// assert!(err.is_duplicate());
    /// ```
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateEntry { .. })
    }
}
