//! Text Assembler — joins ingested segments into the document string.

use crate::ingest::DocumentSegment;

/// Separator placed between consecutive segments.
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// Number of characters shown in the preview area.
pub const PREVIEW_CHAR_LIMIT: usize = 4000;

/// Concatenates segment text in input order.
pub fn assemble(segments: &[DocumentSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// First `PREVIEW_CHAR_LIMIT` characters of `text`. Display only.
pub fn preview(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_CHAR_LIMIT) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
