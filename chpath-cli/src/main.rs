//! Main entry point for the chpath CLI.
//!
//! Pipeline: split the source path string, prepend any extra directories,
//! clean (validate + deduplicate), and write the result in the platform's
//! conventional form. Every per-entry rejection is a warning at most; the
//! run only fails if the result cannot be written.

mod cli;
mod error;
mod output;

use clap::Parser;
use std::io;

use chpath::{init_logger, Logger, PathCleaner, PathList};
use cli::Cli;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    let logger = init_logger(cli.verbose);

    match run(cli, &logger) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli, logger: &Logger) -> Result<(), CliError> {
    #[cfg(windows)]
    let name = cli.name;
    #[cfg(not(windows))]
    let name = String::from("PATH");

    let raw = cli.path.unwrap_or_default();
    let list = PathList::split(&raw).prepend(cli.dirs);

    let cleaner = PathCleaner::new().keep_symlinks(cli.keep_symlinks);
    let report = cleaner.clean(list);

    for skipped in report.skipped() {
        logger.warn(&skipped.reason.to_string());
    }

    let stdout = io::stdout();
    output::write_path(&mut stdout.lock(), &name, &report.kept().join())?;
    Ok(())
}
