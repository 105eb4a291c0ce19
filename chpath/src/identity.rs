//! Filesystem identity of directory entries.
//!
//! Duplicate detection compares entries by what they *are* on disk, not by
//! how they are spelled: two textually different entries that reach the same
//! physical directory through different symlink chains must count as one.
//! The comparable token for that test is [`DirIdentity`].
//!
//! All direct OS interaction sits behind the [`Filesystem`] trait so the
//! deduplication logic stays host-agnostic and can be unit-tested against an
//! in-memory fake.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A comparable token identifying the filesystem object behind an entry.
///
/// Two entries with equal identities denote the same directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirIdentity {
    /// Physical identity: device and file serial number of the target.
    ///
    /// This is the strong form used when symlinks are resolved; it unifies
    /// aliases regardless of spelling.
    Device {
        /// Device the directory lives on.
        device: u64,
        /// File serial number (inode) on that device.
        inode: u64,
    },

    /// String-canonical identity: a cleaned absolute path.
    ///
    /// Used when symlinks are deliberately kept distinct, and as the
    /// fallback on platforms without a stable device/serial pair.
    Path(PathBuf),
}

/// The result of probing a canonicalized entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirProbe {
    /// Identity of the target.
    pub identity: DirIdentity,
    /// Whether the target is a directory.
    pub is_dir: bool,
}

/// Capability for the filesystem questions the cleaning pipeline asks.
///
/// The production implementation is [`RealFilesystem`]; tests substitute an
/// in-memory fake.
pub trait Filesystem {
    /// Resolve all symbolic links in `path` to the real underlying path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] if any component does not exist
    /// (including dangling links), [`Error::PermissionDenied`] or
    /// [`Error::Io`] for other lookup failures.
    fn resolve_symlinks(&self, path: &Path) -> Result<PathBuf>;

    /// Stat `path` and report its identity and kind.
    ///
    /// Follows symlinks, so probing a link to a directory reports a
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`], [`Error::PermissionDenied`], or
    /// [`Error::Io`] if the target cannot be examined.
    fn probe(&self, path: &Path) -> Result<DirProbe>;
}

/// [`Filesystem`] implementation backed by the host OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFilesystem;

impl Filesystem for RealFilesystem {
    fn resolve_symlinks(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).map_err(|e| stat_error(path, e))
    }

    fn probe(&self, path: &Path) -> Result<DirProbe> {
        let metadata = fs::metadata(path).map_err(|e| stat_error(path, e))?;
        Ok(DirProbe {
            identity: identity_of(path, &metadata)?,
            is_dir: metadata.is_dir(),
        })
    }
}

fn stat_error(path: &Path, e: std::io::Error) -> Error {
    match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    }
}

#[cfg(unix)]
fn identity_of(_path: &Path, metadata: &fs::Metadata) -> Result<DirIdentity> {
    use std::os::unix::fs::MetadataExt;

    Ok(DirIdentity::Device {
        device: metadata.dev(),
        inode: metadata.ino(),
    })
}

#[cfg(not(unix))]
fn identity_of(path: &Path, _metadata: &fs::Metadata) -> Result<DirIdentity> {
    // No portable device/serial pair; the resolved path is the next best
    // identity token.
    Ok(DirIdentity::Path(
        fs::canonicalize(path).map_err(|e| stat_error(path, e))?,
    ))
}
