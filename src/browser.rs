//! Opening the chat interface in the default browser.
//!
//! Fire-and-forget: the opener process is spawned and never waited on.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Browser invocation error type
#[derive(Debug, Error)]
#[error("failed to open browser: {0}")]
pub struct BrowserError(io::Error);

/// Open `url` in the default browser via the platform opener.
pub fn open(url: &str) -> Result<(), BrowserError> {
    let mut command = opener_command(url);
    command
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(BrowserError)
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(url);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
