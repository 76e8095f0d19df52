//! Clipboard write for the copy-website affordance.

use clipboard_rs::{Clipboard, ClipboardContext};
use thiserror::Error;

/// Errors raised by clipboard writes. The platform layer reports opaque
/// failures, so the message is carried as a string.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard access failed: {0}")]
    AccessFailed(String),

    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Write a mission's website URL to the system clipboard.
///
/// Callers reduce failures to a status note; the view never aborts on them.
pub fn copy_website(website: &str) -> Result<(), ClipboardError> {
    let ctx = ClipboardContext::new().map_err(|e| ClipboardError::AccessFailed(e.to_string()))?;
    ctx.set_text(website.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}
