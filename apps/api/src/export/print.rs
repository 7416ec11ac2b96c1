//! Print adapter: wraps the rendered document in a standalone print-ready
//! page and drives a display surface through open / write / present.

use crate::export::{DisplaySurfaceSink, ExportError};

const PRINT_EMPTY_NOTICE: &str = "No generated resume to print";

/// Print-safe styling for the standalone page. Section banners keep their
/// color in physical print via `print-color-adjust: exact`.
const PRINT_CSS: &str = r#"
      body {
        font-family: Arial, Helvetica, sans-serif;
        padding: 24px;
        color: #2d3748;
        line-height: 1.7;
      }
      h3 {
        background: linear-gradient(135deg, #2c5282 0%, #1a365d 100%);
        color: #ffffff;
        margin: 0 0 24px 0;
        font-size: 1.6rem;
        font-weight: 800;
        letter-spacing: 0.02em;
        text-transform: uppercase;
        padding: 12px 20px;
        border-radius: 8px;
      }
      .section {
        margin-bottom: 32px;
      }
      .section > div {
        padding: 0 20px;
      }
      p {
        margin: 0 0 12px;
      }
      @media print {
        body {
          padding: 0;
        }
        h3 {
          -webkit-print-color-adjust: exact;
          print-color-adjust: exact;
        }
      }
"#;

/// Deferred print trigger: the short delay lets the surface finish layout
/// before the dialog opens.
const PRINT_TRIGGER_SCRIPT: &str =
    r#"<script>setTimeout(function () { window.focus(); window.print(); }, 250);</script>"#;

/// Exports the document to a display surface and requests the print
/// dialog. `rendered` is the structured HTML surface; the raw text is the
/// fallback body when no rendered surface is available. Refuses an empty
/// result with a user notice and no side effects; a blocked surface aborts
/// before anything is written.
pub fn export_print(
    rendered: Option<&str>,
    raw: &str,
    surface: &mut dyn DisplaySurfaceSink,
) -> Result<(), ExportError> {
    if raw.is_empty() {
        return Err(ExportError::NothingToExport(PRINT_EMPTY_NOTICE));
    }
    let body = rendered.filter(|r| !r.is_empty()).unwrap_or(raw);
    let page = print_page(body);

    surface.open("Resume")?;
    surface.write_document(&page)?;
    surface.present()
}

fn print_page(body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>Resume</title>\
         <style>{PRINT_CSS}</style></head><body>{body}{PRINT_TRIGGER_SCRIPT}</body></html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::CapturedSurface;

    /// Surface standing in for a host that blocks new windows.
    #[derive(Default)]
    struct BlockedSurface {
        writes: usize,
        presents: usize,
    }

    impl DisplaySurfaceSink for BlockedSurface {
        fn open(&mut self, _title: &str) -> Result<(), ExportError> {
            Err(ExportError::SurfaceBlocked)
        }

        fn write_document(&mut self, _page: &str) -> Result<(), ExportError> {
            self.writes += 1;
            Ok(())
        }

        fn present(&mut self) -> Result<(), ExportError> {
            self.presents += 1;
            Ok(())
        }
    }

    #[test]
    fn test_empty_result_refuses_with_notice() {
        let mut surface = CapturedSurface::default();
        let err = export_print(None, "", &mut surface).unwrap_err();
        assert_eq!(
            err,
            ExportError::NothingToExport("No generated resume to print")
        );
        assert!(surface.page.is_none());
        assert!(!surface.presented);
    }

    #[test]
    fn test_blocked_surface_aborts_without_writes() {
        let mut surface = BlockedSurface::default();
        let err = export_print(Some("<p>x</p>"), "x", &mut surface).unwrap_err();
        assert_eq!(err, ExportError::SurfaceBlocked);
        assert_eq!(
            err.to_string(),
            "Please allow popups to print or download the resume"
        );
        assert_eq!(surface.writes, 0);
        assert_eq!(surface.presents, 0);
    }

    #[test]
    fn test_page_embeds_rendered_surface_and_print_styling() {
        let mut surface = CapturedSurface::default();
        export_print(Some("<div class=\"section\">body</div>"), "raw", &mut surface).unwrap();
        let page = surface.page.unwrap();
        assert!(page.contains("<div class=\"section\">body</div>"));
        assert!(page.contains("print-color-adjust: exact"));
        assert!(page.contains("linear-gradient"));
        assert!(page.contains("window.print()"));
        assert!(surface.presented);
        assert_eq!(surface.title.as_deref(), Some("Resume"));
    }

    #[test]
    fn test_falls_back_to_raw_text_without_rendered_surface() {
        let mut surface = CapturedSurface::default();
        export_print(None, "plain result", &mut surface).unwrap();
        assert!(surface.page.unwrap().contains("plain result"));
    }

    #[test]
    fn test_empty_rendered_surface_also_falls_back() {
        let mut surface = CapturedSurface::default();
        export_print(Some(""), "plain result", &mut surface).unwrap();
        assert!(surface.page.unwrap().contains("plain result"));
    }
}
