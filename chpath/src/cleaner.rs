//! The validate/deduplicate pipeline.
//!
//! [`PathCleaner`] consumes a [`PathList`] in order and keeps every entry
//! that names an existing, not-yet-seen directory. Deduplication compares
//! [`DirIdentity`] tokens, so aliases through different symlink chains
//! collapse to the first occurrence, while the *original* spelling of each
//! accepted entry is what survives into the output.
//!
//! Cleaning is total: a bad entry is recorded in the [`CleanReport`] and
//! skipped, never fatal.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::canonical::{absolutize, clean_components, SymlinkPolicy};
use crate::error::{Error, Result};
use crate::identity::{DirIdentity, Filesystem, RealFilesystem};
use crate::list::PathList;

/// Cleans a search-path list against a [`Filesystem`].
///
/// Configuration is explicit and carried by the cleaner itself; nothing is
/// read from global state.
///
/// # Examples
///
/// ```no_run
/// use chpath::{PathCleaner, PathList};
///
/// let list = PathList::split("/usr/bin:/usr/bin:/opt/missing");
/// let report = PathCleaner::new().clean(list);
/// assert_eq!(report.kept().join(), "/usr/bin");
/// assert_eq!(report.skipped().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PathCleaner<F = RealFilesystem> {
    policy: SymlinkPolicy,
    fs: F,
}

impl PathCleaner<RealFilesystem> {
    /// Create a cleaner backed by the host filesystem, resolving symlinks.
    #[must_use]
    pub fn new() -> Self {
        Self::with_filesystem(RealFilesystem)
    }
}

impl Default for PathCleaner<RealFilesystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Filesystem> PathCleaner<F> {
    /// Create a cleaner over a specific [`Filesystem`] implementation.
    ///
    /// Symlinks are resolved by default; see
    /// [`keep_symlinks`](Self::keep_symlinks).
    pub fn with_filesystem(fs: F) -> Self {
        Self {
            policy: SymlinkPolicy::default(),
            fs,
        }
    }

    /// Keep symbolic links as distinct entries instead of resolving them.
    ///
    /// With `keep` set, entries are cleaned lexically and compared by their
    /// cleaned absolute path, so two symlinks aliasing one directory both
    /// survive.
    #[must_use]
    pub fn keep_symlinks(mut self, keep: bool) -> Self {
        self.policy = if keep {
            SymlinkPolicy::Keep
        } else {
            SymlinkPolicy::Resolve
        };
        self
    }

    /// The active symlink policy.
    #[must_use]
    pub fn policy(&self) -> SymlinkPolicy {
        self.policy
    }

    /// Clean the list: drop invalid, missing, non-directory, and duplicate
    /// entries, preserving the order and original spelling of the rest.
    ///
    /// Never fails as a whole; individual rejections are collected in the
    /// returned [`CleanReport`].
    #[must_use]
    pub fn clean(&self, list: PathList) -> CleanReport {
        let mut kept = Vec::new();
        let mut skipped = Vec::new();
        let mut seen: HashSet<DirIdentity> = HashSet::new();

        for entry in list.into_entries() {
            match self.admit(&entry, &seen) {
                Ok(identity) => {
                    log::debug!("keeping {entry}");
                    seen.insert(identity);
                    kept.push(entry);
                }
                Err(reason) => {
                    log::debug!("skipping {entry}: {reason}");
                    skipped.push(SkippedEntry { entry, reason });
                }
            }
        }

        CleanReport {
            kept: PathList::from_entries(kept),
            skipped,
        }
    }

    /// Check a single entry against the identities accepted so far.
    ///
    /// Returns the identity to record on acceptance, or the reason the
    /// entry must be skipped.
    fn admit(&self, entry: &str, seen: &HashSet<DirIdentity>) -> Result<DirIdentity> {
        let absolute = absolutize(Path::new(entry))?;

        let (identity, is_dir) = match self.policy {
            SymlinkPolicy::Resolve => {
                let canonical = self.fs.resolve_symlinks(&absolute)?;
                let probe = self.fs.probe(&canonical)?;
                (probe.identity, probe.is_dir)
            }
            SymlinkPolicy::Keep => {
                let canonical = clean_components(&absolute)?;
                let probe = self.fs.probe(&canonical)?;
                (DirIdentity::Path(canonical), probe.is_dir)
            }
        };

        if seen.contains(&identity) {
            return Err(Error::DuplicateEntry {
                path: PathBuf::from(entry),
            });
        }
        if !is_dir {
            return Err(Error::NotADirectory {
                path: PathBuf::from(entry),
            });
        }
        Ok(identity)
    }
}

/// The outcome of cleaning a [`PathList`].
#[derive(Debug)]
pub struct CleanReport {
    kept: PathList,
    skipped: Vec<SkippedEntry>,
}

impl CleanReport {
    /// The surviving entries, in input order and original spelling.
    #[must_use]
    pub fn kept(&self) -> &PathList {
        &self.kept
    }

    /// Consume the report, yielding the surviving list.
    #[must_use]
    pub fn into_kept(self) -> PathList {
        self.kept
    }

    /// Every rejected entry with the reason it was skipped.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }
}

/// A single rejected entry.
#[derive(Debug)]
pub struct SkippedEntry {
    /// The entry as it appeared in the input.
    pub entry: String,
    /// Why it was skipped.
    pub reason: Error,
}
