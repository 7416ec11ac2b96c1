//! Word-document adapter: wraps the rendered document in a legacy Office
//! markup shell and saves it with a word-processor extension.

use crate::export::{ExportError, FileSaveSink};

const WORD_EMPTY_NOTICE: &str = "No generated resume to download";

pub const WORD_FILENAME: &str = "generated-resume.doc";
pub const WORD_CONTENT_TYPE: &str = "application/msword";

/// Leading byte-order marker plus the Office XML namespace declarations.
/// Word processors sniff these to open the HTML payload as a document.
const UTF8_BOM: &str = "\u{feff}";
const WORD_HEADER: &str = "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
     xmlns:w=\"urn:schemas-microsoft-com:office:word\" \
     xmlns=\"http://www.w3.org/TR/REC-html40\">\
     <head><meta charset=\"utf-8\"><title>Resume</title></head><body>";
const WORD_FOOTER: &str = "</body></html>";

/// Exports the document as `generated-resume.doc`. `rendered` is the
/// structured HTML surface, falling back to the raw text. Refuses an empty
/// result with a user notice and no file side effect.
pub fn export_word(
    rendered: Option<&str>,
    raw: &str,
    files: &mut dyn FileSaveSink,
) -> Result<(), ExportError> {
    if raw.is_empty() {
        return Err(ExportError::NothingToExport(WORD_EMPTY_NOTICE));
    }
    let body = rendered.filter(|r| !r.is_empty()).unwrap_or(raw);
    let document = format!("{UTF8_BOM}{WORD_HEADER}{body}{WORD_FOOTER}");

    files.save(WORD_FILENAME, WORD_CONTENT_TYPE, document.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::CapturingFileSink;

    #[test]
    fn test_empty_result_refuses_with_notice() {
        let mut files = CapturingFileSink::default();
        let err = export_word(None, "", &mut files).unwrap_err();
        assert_eq!(
            err,
            ExportError::NothingToExport("No generated resume to download")
        );
        assert!(files.saved.is_none());
    }

    #[test]
    fn test_saved_file_has_word_name_and_type() {
        let mut files = CapturingFileSink::default();
        export_word(Some("<p>body</p>"), "body", &mut files).unwrap();
        let saved = files.saved.unwrap();
        assert_eq!(saved.filename, "generated-resume.doc");
        assert_eq!(saved.content_type, "application/msword");
    }

    #[test]
    fn test_payload_starts_with_bom_and_declares_office_namespaces() {
        let mut files = CapturingFileSink::default();
        export_word(Some("<p>body</p>"), "body", &mut files).unwrap();
        let saved = files.saved.unwrap();
        assert_eq!(&saved.bytes[..3], [0xEF, 0xBB, 0xBF]);
        let text = String::from_utf8(saved.bytes).unwrap();
        assert!(text.contains("urn:schemas-microsoft-com:office:word"));
        assert!(text.contains("urn:schemas-microsoft-com:office:office"));
        assert!(text.contains("http://www.w3.org/TR/REC-html40"));
        assert!(text.contains("<p>body</p>"));
        assert!(text.ends_with("</body></html>"));
    }

    #[test]
    fn test_falls_back_to_raw_text_without_rendered_surface() {
        let mut files = CapturingFileSink::default();
        export_word(None, "just text", &mut files).unwrap();
        let saved = files.saved.unwrap();
        assert!(String::from_utf8(saved.bytes).unwrap().contains("just text"));
    }
}
