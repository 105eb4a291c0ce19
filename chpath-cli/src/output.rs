//! Output formatting for the cleaned search path.
//!
//! The platform convention differs: Unix-like systems expect the bare
//! delimited string (ready for `PATH=$(chpath)`), while on Windows the
//! result is written as a `NAME=value` assignment.

use std::io::{self, Write};

/// Write the cleaned path in the platform's conventional form.
///
/// On Windows the value is written as `NAME=value` using the given variable
/// name; elsewhere the bare path is written and `name` is ignored.
#[cfg(windows)]
pub fn write_path<W: Write>(out: &mut W, name: &str, cleaned: &str) -> io::Result<()> {
    writeln!(out, "{name}={cleaned}")
}

/// Write the cleaned path in the platform's conventional form.
///
/// On Windows the value is written as `NAME=value` using the given variable
/// name; elsewhere the bare path is written and `name` is ignored.
#[cfg(not(windows))]
pub fn write_path<W: Write>(out: &mut W, _name: &str, cleaned: &str) -> io::Result<()> {
    writeln!(out, "{cleaned}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn test_write_path_bare_line() {
        let mut out = Vec::new();
        write_path(&mut out, "PATH", "/usr/bin:/usr/local/bin").unwrap();
        assert_eq!(out, b"/usr/bin:/usr/local/bin\n");
    }

    #[cfg(windows)]
    #[test]
    fn test_write_path_assignment() {
        let mut out = Vec::new();
        write_path(&mut out, "PATH", r"C:\bin;C:\tools").unwrap();
        assert_eq!(out, b"PATH=C:\\bin;C:\\tools\n");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_write_path_empty_result() {
        let mut out = Vec::new();
        write_path(&mut out, "PATH", "").unwrap();
        assert_eq!(out, b"\n");
    }
}
