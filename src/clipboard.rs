//! System clipboard access.

use thiserror::Error;

/// Clipboard error type
#[derive(Debug, Error)]
#[error("clipboard error: {0}")]
pub struct ClipboardError(String);

/// Copy `text` to the system clipboard.
///
/// Failure is non-fatal for callers: the assembled prompt still exists and
/// can be printed instead.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError(e.to_string()))?;
    Ok(())
}
