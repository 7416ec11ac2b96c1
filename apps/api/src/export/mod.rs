#![allow(dead_code)]

//! Export Adapters - re-serialize the current document into the four
//! downstream formats.
//!
//! Each adapter writes through exactly one sink trait. The sinks stand in
//! for host capabilities (open a display surface, save a file, write the
//! clipboard), so the adapters stay testable without a browser: the HTTP
//! layer supplies capturing sinks and turns the captures into responses.

pub mod clipboard;
pub mod handlers;
pub mod print;
pub mod text;
pub mod word;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// Export attempted with no generated result present. Carries the
    /// adapter's own user-facing notice.
    #[error("{0}")]
    NothingToExport(&'static str),

    /// The host refused to open a new display surface.
    #[error("Please allow popups to print or download the resume")]
    SurfaceBlocked,

    /// The system clipboard rejected the write.
    #[error("Copy failed — please select and copy manually")]
    ClipboardWrite,
}

/// A transient display surface that can show a standalone document and
/// bring up the platform's print dialog.
pub trait DisplaySurfaceSink {
    /// Opens a new surface. Fails with `SurfaceBlocked` when the host
    /// denies it; the adapter must then abort without side effects.
    fn open(&mut self, title: &str) -> Result<(), ExportError>;

    /// Writes the full standalone page into the surface.
    fn write_document(&mut self, page: &str) -> Result<(), ExportError>;

    /// Asks the surface to present its print dialog once layout settles.
    fn present(&mut self) -> Result<(), ExportError>;
}

/// A file-save capability: one named file per export.
pub trait FileSaveSink {
    fn save(&mut self, filename: &str, content_type: &str, bytes: &[u8]) -> Result<(), ExportError>;
}

/// A plain-text clipboard write capability.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ExportError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Capturing sink implementations (HTTP layer and tests)
// ────────────────────────────────────────────────────────────────────────────

/// Display surface that records what the adapter wrote. The HTTP layer
/// serves the captured page; the browser tab showing it is the surface.
#[derive(Debug, Default)]
pub struct CapturedSurface {
    pub title: Option<String>,
    pub page: Option<String>,
    pub presented: bool,
}

impl DisplaySurfaceSink for CapturedSurface {
    fn open(&mut self, title: &str) -> Result<(), ExportError> {
        self.title = Some(title.to_string());
        Ok(())
    }

    fn write_document(&mut self, page: &str) -> Result<(), ExportError> {
        self.page = Some(page.to_string());
        Ok(())
    }

    fn present(&mut self) -> Result<(), ExportError> {
        self.presented = true;
        Ok(())
    }
}

/// A file captured by [`CapturingFileSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// File sink that holds the single saved file for the HTTP layer to serve
/// as an attachment.
#[derive(Debug, Default)]
pub struct CapturingFileSink {
    pub saved: Option<SavedFile>,
}

impl FileSaveSink for CapturingFileSink {
    fn save(&mut self, filename: &str, content_type: &str, bytes: &[u8]) -> Result<(), ExportError> {
        self.saved = Some(SavedFile {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}

/// Clipboard sink that captures the text for the frontend to finish the
/// write on the client side.
#[derive(Debug, Default)]
pub struct CapturingClipboard {
    pub text: Option<String>,
}

impl ClipboardSink for CapturingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ExportError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}
