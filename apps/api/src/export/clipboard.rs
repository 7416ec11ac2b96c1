//! Clipboard adapter: writes the raw generation result to the system
//! clipboard capability.

use crate::export::{ClipboardSink, ExportError};

const CLIPBOARD_EMPTY_NOTICE: &str = "Nothing to copy";

/// Message reported to the user after a successful copy.
pub const CLIPBOARD_SUCCESS_MESSAGE: &str = "Copied resume text to clipboard";

/// Writes the raw text through the clipboard sink. Refuses an empty result
/// with a user notice; a failed write surfaces the copy-failed notice via
/// `ExportError::ClipboardWrite`.
pub fn export_clipboard(raw: &str, clipboard: &mut dyn ClipboardSink) -> Result<(), ExportError> {
    if raw.is_empty() {
        return Err(ExportError::NothingToExport(CLIPBOARD_EMPTY_NOTICE));
    }
    clipboard.write_text(raw)
}
