//! CLI structure for chpath.
//!
//! A single command with options, defined with clap's derive macros. The
//! search-path source defaults from the inherited `PATH` variable through
//! clap's env support.

use clap::Parser;

/// Command-line tool for cleaning the executable search path.
#[derive(Parser)]
#[command(name = "chpath")]
#[command(
    version,
    about = "Remove duplicate and invalid entries from a search path",
    long_about = "Remove duplicate and invalid entries from a delimited search path \
                  such as PATH. Entries that do not exist, are not directories, or \
                  alias an already-kept directory are dropped; the rest are printed \
                  in their original order and spelling."
)]
pub struct Cli {
    /// Search path to clean instead of the inherited PATH
    #[arg(long, value_name = "PATH", env = "PATH", hide_env_values = true)]
    pub path: Option<String>,

    /// Print a warning to stderr for every skipped entry
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Do not resolve (dereference) symbolic links
    #[arg(long, alias = "keepsymlinks")]
    pub keep_symlinks: bool,

    /// Variable name to use in the NAME=value output (output only)
    #[cfg(windows)]
    #[arg(long, value_name = "NAME", default_value = "PATH")]
    pub name: String,

    /// Directories to prepend to the search path before cleaning
    #[arg(value_name = "DIR")]
    pub dirs: Vec<String>,
}
