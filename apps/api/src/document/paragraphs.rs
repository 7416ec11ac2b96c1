//! Paragraph Renderer - groups a section's content into blank-line
//! delimited paragraph blocks.

use serde::{Deserialize, Serialize};

/// A blank-line-delimited group of consecutive text lines. Each line is
/// rendered with an explicit line-break marker by the HTML surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphBlock {
    pub lines: Vec<String>,
}

/// Splits `content` on runs of one or more blank lines, trims each chunk,
/// drops empty chunks, and splits the survivors on single line breaks.
/// Empty content yields an empty sequence, never an error.
pub fn split_paragraphs(content: &str) -> Vec<ParagraphBlock> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        if line.trim().is_empty() {
            flush_chunk(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    flush_chunk(&mut current, &mut blocks);

    blocks
}

/// Closes the pending chunk: join, trim the chunk as a whole, and re-split
/// into lines. Interior spacing inside lines is preserved; only the chunk
/// edges are trimmed.
fn flush_chunk(current: &mut Vec<&str>, blocks: &mut Vec<ParagraphBlock>) {
    if current.is_empty() {
        return;
    }
    let chunk = current.join("\n");
    current.clear();

    let trimmed = chunk.trim();
    if trimmed.is_empty() {
        return;
    }
    blocks.push(ParagraphBlock {
        lines: trimmed.split('\n').map(str::to_string).collect(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(block: &ParagraphBlock) -> Vec<&str> {
        block.lines.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_empty_content_yields_no_blocks() {
        assert!(split_paragraphs("").is_empty());
    }

    #[test]
    fn test_whitespace_only_content_yields_no_blocks() {
        assert!(split_paragraphs(" \n\t\n  ").is_empty());
    }

    #[test]
    fn test_two_single_line_paragraphs() {
        let blocks = split_paragraphs("A\n\nB");
        assert_eq!(blocks.len(), 2);
        assert_eq!(lines(&blocks[0]), vec!["A"]);
        assert_eq!(lines(&blocks[1]), vec!["B"]);
    }

    #[test]
    fn test_multi_line_paragraph_keeps_line_order() {
        let blocks = split_paragraphs("A\nB\n\nC");
        assert_eq!(blocks.len(), 2);
        assert_eq!(lines(&blocks[0]), vec!["A", "B"]);
        assert_eq!(lines(&blocks[1]), vec!["C"]);
    }

    #[test]
    fn test_blank_line_with_spaces_still_separates() {
        let blocks = split_paragraphs("A\n   \nB");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_runs_of_blank_lines_collapse_to_one_separator() {
        let blocks = split_paragraphs("A\n\n\n\nB");
        assert_eq!(blocks.len(), 2);
        assert_eq!(lines(&blocks[0]), vec!["A"]);
        assert_eq!(lines(&blocks[1]), vec!["B"]);
    }

    #[test]
    fn test_surrounding_blank_lines_are_dropped() {
        let blocks = split_paragraphs("\n\nA\nB\n\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(lines(&blocks[0]), vec!["A", "B"]);
    }

    #[test]
    fn test_chunk_edges_are_trimmed_but_interior_spacing_survives() {
        let blocks = split_paragraphs("  Dear Sir,  \n  best regards  ");
        assert_eq!(blocks.len(), 1);
        // Chunk-level trim touches the outer edges only.
        assert_eq!(lines(&blocks[0]), vec!["Dear Sir,  ", "  best regards"]);
    }
}
