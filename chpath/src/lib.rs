#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # chpath
//!
//! A library for cleaning executable search paths.
//!
//! Given a delimited search-path string (such as `PATH`), chpath drops
//! entries that do not exist, are not directories, or duplicate an
//! already-kept directory — comparing by filesystem identity, so different
//! symlink spellings of the same directory count as one. Surviving entries
//! keep their original spelling and relative order.
//!
//! ## Core Types
//!
//! - [`PathList`]: ordered entry sequence with split/join/prepend
//! - [`PathCleaner`] and [`CleanReport`]: the validate/deduplicate pipeline
//! - [`DirIdentity`] and [`Filesystem`]: the comparable identity token and
//!   the OS capability behind it
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: diagnostics infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use chpath::{PathCleaner, PathList};
//!
//! let list = PathList::split("/usr/bin:/usr/bin:/usr/local/bin")
//!     .prepend(vec!["/extra/bin".to_string()]);
//! let report = PathCleaner::new().clean(list);
//!
//! // One warning line per skipped entry, if the caller wants them
//! for skipped in report.skipped() {
//!     eprintln!("{}", skipped.reason);
//! }
//! println!("{}", report.kept().join());
//! ```

pub mod canonical;
pub mod cleaner;
pub mod error;
pub mod identity;
pub mod list;
pub mod logging;

// Re-export key types at crate root for convenience
pub use canonical::SymlinkPolicy;
pub use cleaner::{CleanReport, PathCleaner, SkippedEntry};
pub use error::{Error, Result};
pub use identity::{DirIdentity, DirProbe, Filesystem, RealFilesystem};
pub use list::{PathList, LIST_SEPARATOR};
pub use logging::{init_logger, LogLevel, Logger};
