//! Build script for chpath-cli.
//!
//! Generates the man page at build time using clap_mangen. The generated
//! page lands in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing
//! from the main crate, since build scripts cannot depend on the crate
//! being built. Keep this in sync with src/cli.rs.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("chpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Remove duplicate and invalid entries from a search path")
        .arg(
            Arg::new("path")
                .long("path")
                .help("Search path to clean instead of the inherited PATH")
                .value_name("PATH")
                .env("PATH"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print a warning to stderr for every skipped entry")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep-symlinks")
                .long("keep-symlinks")
                .alias("keepsymlinks")
                .help("Do not resolve (dereference) symbolic links")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dirs")
                .value_name("DIR")
                .num_args(0..)
                .help("Directories to prepend to the search path before cleaning"),
        )
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("chpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
