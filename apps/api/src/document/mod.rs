// Document pipeline: raw generated text -> sections -> paragraph blocks.
// Pure functions only; every generation result gets a fresh Document.

pub mod paragraphs;
pub mod sections;

use serde::{Deserialize, Serialize};

pub use paragraphs::{split_paragraphs, ParagraphBlock};
pub use sections::{parse_sections, Section};

/// One section of the assembled document: the parsed section plus its
/// derived paragraph blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSection {
    pub title: Option<String>,
    pub content: String,
    pub paragraphs: Vec<ParagraphBlock>,
}

/// The in-memory document derived from exactly one raw generation result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sections: Vec<DocumentSection>,
}

/// Assembles a `Document` from a raw generation result: the section parser
/// runs once, the paragraph renderer once per section. Deterministic and
/// idempotent; the same input always yields a structurally identical
/// document.
pub fn assemble(raw: &str) -> Document {
    let sections = parse_sections(raw)
        .into_iter()
        .map(|section| {
            let paragraphs = split_paragraphs(&section.content);
            DocumentSection {
                title: section.title,
                content: section.content,
                paragraphs,
            }
        })
        .collect();
    Document { sections }
}
