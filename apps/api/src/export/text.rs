//! Plain-text adapter: saves the raw generation result verbatim.

use crate::export::{ExportError, FileSaveSink};

const TEXT_EMPTY_NOTICE: &str = "No generated resume to download";

pub const TEXT_FILENAME: &str = "generated-resume.txt";
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

/// Exports the raw text (not the structured markup) as
/// `generated-resume.txt`. Refuses an empty result with a user notice.
pub fn export_text(raw: &str, files: &mut dyn FileSaveSink) -> Result<(), ExportError> {
    if raw.is_empty() {
        return Err(ExportError::NothingToExport(TEXT_EMPTY_NOTICE));
    }
    files.save(TEXT_FILENAME, TEXT_CONTENT_TYPE, raw.as_bytes())
}
