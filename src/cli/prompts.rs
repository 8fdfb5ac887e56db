//! Centralized user-facing messages for CLI output.

use crossterm::style::Stylize;

/// Print an error message to stderr (red). Errors are always shown.
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(quiet: bool) {
    if !quiet {
        eprintln!("{}", "*** -COPIED TO CLIPBOARD- ***".green());
    }
}

/// Print password output summary - suppressed in quiet mode
pub fn passwords_written(count: usize, path: &str, quiet: bool) {
    if !quiet {
        eprintln!("{count} password(s) \u{2192} {path}");
    }
}

pub fn defaults_cleared(quiet: bool) {
    if !quiet {
        eprintln!("Saved defaults cleared.");
    }
}
