//! Section Parser - splits raw generated text into an ordered list of
//! titled sections.
//!
//! A heading is a line that starts with one or more digits, a period,
//! optional spacing, then a letter ("1. Tailored Cover Letter"). The scan
//! is an explicit line loop over byte offsets rather than a multiline
//! regex, so the slicing rules are visible in one place.

use serde::{Deserialize, Serialize};

/// One titled (or untitled) contiguous block of the generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// The exact matched heading line, trimmed. Absent when the whole text
    /// carries no heading.
    pub title: Option<String>,
    /// Raw text between this heading and the next, trimmed of surrounding
    /// whitespace.
    pub content: String,
}

/// Splits `text` into sections in source order.
///
/// Empty input yields no sections. Input without any heading line yields a
/// single untitled section whose content is the input verbatim. Otherwise
/// each heading opens a section whose content runs up to the next heading
/// (or end of text). Text before the first heading is not assigned to any
/// section; see DESIGN.md for the rationale behind keeping that behavior.
///
/// This function never fails.
pub fn parse_sections(text: &str) -> Vec<Section> {
    if text.is_empty() {
        return Vec::new();
    }

    // Byte spans of every heading line, in top-to-bottom order. The span
    // covers the line text only, never the trailing newline.
    let mut headings: Vec<(usize, usize)> = Vec::new();
    let mut offset = 0;
    for line in text.split('\n') {
        let end = offset + line.len();
        if is_heading_line(line) {
            headings.push((offset, end));
        }
        offset = end + 1;
    }

    if headings.is_empty() {
        return vec![Section {
            title: None,
            content: text.to_string(),
        }];
    }

    let mut sections = Vec::with_capacity(headings.len());
    for (i, &(start, end)) in headings.iter().enumerate() {
        let content_end = match headings.get(i + 1) {
            Some(&(next_start, _)) => next_start,
            None => text.len(),
        };
        sections.push(Section {
            title: Some(text[start..end].trim().to_string()),
            content: text[end..content_end].trim().to_string(),
        });
    }
    sections
}

/// Heading predicate: digits at column zero, a period, optional spacing,
/// then a letter. Indented numbered lines do not count.
fn is_heading_line(line: &str) -> bool {
    let after_digits = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == line.len() {
        return false;
    }
    let Some(after_period) = after_digits.strip_prefix('.') else {
        return false;
    };
    after_period
        .trim_start_matches([' ', '\t'])
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
}
