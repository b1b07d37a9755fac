//! Reporting through GitHub Actions workflow commands.
//!
//! The runner scans stdout for lines of the form `::command::data`. An `error`
//! command shows up as an annotation on the run; the failed-run signal itself
//! is the process exit code.

use std::io::Write;
use std::process::ExitCode;

use crate::error::Error;

/// Escape a message so it survives as the data part of a workflow command.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Report a failed run and produce the exit code that marks it failed.
pub fn fail(err: &Error) -> ExitCode {
    let message = err.to_string();
    match err.status() {
        Some(status) => tracing::error!(status = status.as_u16(), "{}", message),
        None => tracing::error!("{}", message),
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", error_command(&message)) {
        tracing::warn!("Failed to write error annotation: {}", e);
    }

    ExitCode::FAILURE
}
