//! HTML surface renderer.
//!
//! Turns an assembled `Document` into the structured markup the frontend
//! preview shows and the print/word exports consume. All interpolated text
//! is HTML-escaped; the markup itself carries the section/paragraph
//! structure.

use crate::document::{Document, ParagraphBlock};

/// Renders the document surface: one `div.section` per section with an
/// optional `h3.section-heading` and the paragraph blocks inside
/// `div.section-content`.
pub fn document_to_html(doc: &Document) -> String {
    let mut out = String::new();
    for section in &doc.sections {
        out.push_str("<div class=\"section\">");
        if let Some(title) = &section.title {
            out.push_str(&format!(
                "<h3 class=\"section-heading\">{}</h3>",
                escape_html(title)
            ));
        }
        out.push_str("<div class=\"section-content\">");
        for block in &section.paragraphs {
            out.push_str(&paragraph_to_html(block));
        }
        out.push_str("</div></div>");
    }
    out
}

/// One paragraph becomes one `<p>`; every line ends with an explicit
/// `<br/>` so single line breaks survive HTML whitespace collapsing.
fn paragraph_to_html(block: &ParagraphBlock) -> String {
    let mut out = String::from("<p>");
    for line in &block.lines {
        out.push_str(&escape_html(line));
        out.push_str("<br/>");
    }
    out.push_str("</p>");
    out
}

/// Escape HTML special characters to prevent markup injection.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
