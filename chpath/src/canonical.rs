//! Entry canonicalization.
//!
//! Every search-path entry is brought to an absolute canonical form before
//! it is validated. How far canonicalization goes is controlled by
//! [`SymlinkPolicy`]:
//!
//! - [`SymlinkPolicy::Resolve`] (the default) follows symbolic links all the
//!   way to the real directory, so two different symlinks into the same
//!   target compare as one entry. Resolution itself goes through the
//!   [`Filesystem`](crate::Filesystem) capability; this module only prepares
//!   the absolute input for it.
//! - [`SymlinkPolicy::Keep`] never touches the filesystem: the path is
//!   cleaned lexically (`.`/`..` removal) and made absolute, so symlink
//!   aliases stay distinct entries.
//!
//! Tilde expansion (`~`, `~/dir`) is applied in both policies. Shells expand
//! `~` on the command line, but entries embedded inside a `PATH` string are
//! never shell-expanded.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// How symbolic links in entries are treated during canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymlinkPolicy {
    /// Resolve symbolic links to the real underlying directory (default).
    #[default]
    Resolve,
    /// Keep symbolic links as written; clean the path lexically only.
    Keep,
}

/// Expand a leading tilde (`~` or `~/dir`) to the home directory.
///
/// Paths without a leading tilde pass through unchanged, as do paths that
/// are not valid UTF-8 (they cannot carry a tilde prefix we recognize).
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for the unsupported `~user` syntax, or
/// when the home directory cannot be determined.
///
/// # Examples
///
/// ```
/// use chpath::canonical::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/bin")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("bin"));
///
/// assert_eq!(expand_tilde(Path::new("/usr/bin")).unwrap(), Path::new("/usr/bin"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        return Ok(path.to_path_buf());
    };

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Make an entry absolute without consulting the filesystem.
///
/// Expands a leading tilde and joins relative entries onto the current
/// working directory. No `.`/`..` cleaning and no symlink resolution happens
/// here.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if tilde expansion fails or the current
/// directory cannot be determined.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        return Ok(expanded);
    }

    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("cannot determine current directory: {e}"),
    })?;
    Ok(cwd.join(expanded))
}

/// Remove `.` and `..` components from an absolute path, lexically.
///
/// This is the [`SymlinkPolicy::Keep`] half of canonicalization: `a/./b`
/// becomes `a/b` and `a/x/../b` becomes `a/b` without asking the filesystem
/// whether `x` is a symlink.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path carries enough `..` components
/// to escape the root.
///
/// # Examples
///
/// ```
/// use chpath::canonical::clean_components;
/// use std::path::{Path, PathBuf};
///
/// let cleaned = clean_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(cleaned, PathBuf::from("/a/c"));
/// ```
pub fn clean_components(path: &Path) -> Result<PathBuf> {
    let mut cleaned = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                cleaned.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                cleaned.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(name) => cleaned.push(name),
            Component::CurDir => {}
            Component::ParentDir => {
                if !cleaned.pop() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "too many '..' components (escapes root)".to_string(),
                    });
                }
            }
        }
    }

    // Popping everything must not erase the root itself
    if has_root && cleaned.as_os_str().is_empty() {
        cleaned.push(Component::RootDir);
    }

    Ok(cleaned)
}
