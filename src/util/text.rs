//! Utility functions for text editing
//!
//! Offsets handed to and from callers are char offsets; the syntax engine
//! slices `str`s, so it works in byte offsets internally and converts at the
//! edges with the helpers below.

use std::ops::Range;

/// Convert a char offset into a byte offset, clamped to the end of `text`
pub fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Convert a byte offset (on a char boundary) into a char offset
pub fn char_offset(text: &str, byte_idx: usize) -> usize {
    text[..byte_idx].chars().count()
}

/// Number of chars in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Expand a cursor (byte offset) to the contiguous non-whitespace run around it.
///
/// Returns an empty range at `cursor` when there is no non-whitespace
/// character on either side.
pub fn word_range(text: &str, cursor: usize) -> Range<usize> {
    let start = text[..cursor]
        .char_indices()
        .rev()
        .take_while(|(_, ch)| !ch.is_whitespace())
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(cursor);

    let end = text[cursor..]
        .char_indices()
        .find(|(_, ch)| ch.is_whitespace())
        .map(|(idx, _)| cursor + idx)
        .unwrap_or(text.len());

    start..end
}

/// Split `text` into (leading whitespace, inner text, trailing whitespace).
///
/// Whitespace-only input is reported entirely as leading whitespace.
pub fn split_whitespace_edges(text: &str) -> (&str, &str, &str) {
    let inner_start = text.len() - text.trim_start().len();
    let inner = text.trim();
    let inner_end = inner_start + inner.len();
    (&text[..inner_start], inner, &text[inner_end..])
}

/// Byte offset of the start of the line containing `offset`
pub fn line_start(text: &str, offset: usize) -> usize {
    text[..offset].rfind('\n').map(|idx| idx + 1).unwrap_or(0)
}

/// Byte offset of the end of the line containing `offset` (before its `\n`)
pub fn line_end(text: &str, offset: usize) -> usize {
    text[offset..]
        .find('\n')
        .map(|idx| offset + idx)
        .unwrap_or(text.len())
}

/// Check whether a selection looks like a URL worth putting in a link target
pub fn is_url(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"));

    match rest {
        Some(rest) => !rest.is_empty() && !text.chars().any(char::is_whitespace),
        None => false,
    }
}
