//! The text buffer plus selection that the syntax engine operates on.

use std::fmt;

use serde::Serialize;

use super::selection::Selection;
use crate::util::text::{byte_offset, char_len, char_offset};

/// Marker used by the visual notation: `"The |quick| fox"`.
pub const SELECTION_MARKER: char = '|';

/// A text value with a forward selection, offsets in chars.
///
/// `selection_start <= selection_end <= text.chars().count()` always holds;
/// a span with `selection_start == selection_end` is a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    text: String,
    selection_start: usize,
    selection_end: usize,
}

impl TextSpan {
    /// Create a span, rejecting offsets outside the text or a reversed range.
    pub fn new(
        text: impl Into<String>,
        selection_start: usize,
        selection_end: usize,
    ) -> Result<Self, SpanError> {
        let text = text.into();
        let len = char_len(&text);

        if selection_start > selection_end {
            return Err(SpanError::Reversed {
                start: selection_start,
                end: selection_end,
            });
        }
        if selection_end > len {
            return Err(SpanError::OutOfBounds {
                offset: selection_end,
                len,
            });
        }

        Ok(Self {
            text,
            selection_start,
            selection_end,
        })
    }

    /// Create a span with a cursor at `offset`
    pub fn cursor(text: impl Into<String>, offset: usize) -> Result<Self, SpanError> {
        Self::new(text, offset, offset)
    }

    /// Create a span from a (possibly reversed) field selection
    pub fn from_selection(text: impl Into<String>, selection: Selection) -> Result<Self, SpanError> {
        Self::new(text, selection.start(), selection.end())
    }

    /// Parse the visual notation: `"a |b| c"` selects `b`, `"a |b"` is a
    /// cursor before `b`, and text without markers has the cursor at the end.
    pub fn from_visual(visual: &str) -> Self {
        let parts: Vec<&str> = visual.splitn(3, SELECTION_MARKER).collect();
        let text = parts.concat();

        let (start, end) = match parts.as_slice() {
            [before, selected, _] => {
                let start = char_len(before);
                (start, start + char_len(selected))
            }
            [before, _] => {
                let start = char_len(before);
                (start, start)
            }
            _ => {
                let len = char_len(&text);
                (len, len)
            }
        };

        Self {
            text,
            selection_start: start,
            selection_end: end,
        }
    }

    /// Render the span in visual notation
    pub fn to_visual(&self) -> String {
        let range = self.byte_range();
        let before = &self.text[..range.start];
        let selected = &self.text[range.clone()];
        let after = &self.text[range.end..];

        if selected.is_empty() {
            format!("{before}{SELECTION_MARKER}{after}")
        } else {
            format!("{before}{SELECTION_MARKER}{selected}{SELECTION_MARKER}{after}")
        }
    }

    pub(crate) fn from_byte_range(text: String, start: usize, end: usize) -> Self {
        let selection_start = char_offset(&text, start);
        let selection_end = char_offset(&text, end);
        Self {
            text,
            selection_start,
            selection_end,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection_start(&self) -> usize {
        self.selection_start
    }

    pub fn selection_end(&self) -> usize {
        self.selection_end
    }

    /// The selection as a forward [`Selection`]
    pub fn selection(&self) -> Selection {
        Selection::new(self.selection_start, self.selection_end)
    }

    pub fn is_cursor(&self) -> bool {
        self.selection_start == self.selection_end
    }

    /// Currently selected text
    pub fn selected_text(&self) -> &str {
        &self.text[self.byte_range()]
    }

    /// Selection as a byte range into [`TextSpan::text`]
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        let start = byte_offset(&self.text, self.selection_start);
        let end = byte_offset(&self.text, self.selection_end);
        start..end
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_visual())
    }
}

/// Caller contract violations when building a [`TextSpan`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// Selection end lies past the end of the text
    OutOfBounds { offset: usize, len: usize },
    /// Selection start lies after selection end
    Reversed { start: usize, end: usize },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::OutOfBounds { offset, len } => {
                write!(f, "Selection offset {} is outside text of length {}", offset, len)
            }
            SpanError::Reversed { start, end } => {
                write!(f, "Selection start {} is after selection end {}", start, end)
            }
        }
    }
}

impl std::error::Error for SpanError {}
