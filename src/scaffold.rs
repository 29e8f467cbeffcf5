//! Test file scaffolding.
//!
//! Creates an empty test file at the derived path (never overwriting an
//! existing one) and hands it to an external editor command.

use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Scaffolding error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("failed to create test file: {0}")]
    Io(#[from] io::Error),
}

/// Editor invocation error type
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("editor command not found: '{0}'")]
    NotFound(String),
    #[error("failed to launch editor: {0}")]
    Failed(io::Error),
}

/// Shown when the editor command is missing from PATH.
pub static EDITOR_REMEDIATION: &str = "\
1. Open VSCode.
2. Press Cmd + Shift + P (on macOS) or Ctrl + Shift + P (on other platforms) to open the command palette.
3. Type Shell Command: Install 'code' command in PATH and select it.
4. This will add the code command to your shell's PATH";

/// Create an empty file at `path` unless one already exists, creating
/// parent directories as needed. Returns whether the file was created.
pub fn ensure_test_file(path: &Path) -> Result<bool, ScaffoldError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::File::create(path)?;
    Ok(true)
}

/// Open `path` with the configured editor command.
///
/// The editor is detached; we do not wait for it to exit.
pub fn open_in_editor(command: &str, path: &Path) -> Result<(), EditorError> {
    let result = Command::new(command)
        .arg(path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match result {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(EditorError::NotFound(command.to_string()))
        }
        Err(e) => Err(EditorError::Failed(e)),
    }
}
