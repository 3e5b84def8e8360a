//! Renders the resolved settings.

use std::io::{self, Write};

use crate::settings::AppSettings;

const UNSET: &str = "(unset)";
const MASKED: &str = "********";

/// Writes a human-readable summary of `settings` to `out`.
///
/// The password itself is never written; only whether it is set.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing to `out` fails.
pub fn write_report<W: Write>(out: &mut W, settings: &AppSettings) -> io::Result<()> {
    let password = if settings.password.is_some() {
        MASKED
    } else {
        UNSET
    };
    writeln!(out, "Application settings:")?;
    writeln!(out, "  standalone mode: {}", settings.is_standalone)?;
    writeln!(out, "  debug mode: {}", settings.is_debug)?;
    writeln!(
        out,
        "  username: {}",
        settings.username.as_deref().unwrap_or(UNSET)
    )?;
    writeln!(out, "  password: {password}")
}

/// Prints the summary of `settings` to standard output.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing to standard output fails.
pub fn print_report(settings: &AppSettings) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, settings)
}
