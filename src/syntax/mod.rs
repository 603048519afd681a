//! Selection-aware Markdown syntax toggling.
//!
//! [`toggle_syntax`] takes the field value with its selection and a
//! [`SyntaxDescriptor`] and returns the new value and selection. It inserts
//! the syntax, or removes it when the selection is already wrapped.
//!
//! # Architecture
//!
//! ```text
//! TextSpan + SyntaxDescriptor
//!     ├─ line syntax (header/quote/list) → lines::style_lines
//!     └─ everything else                 → inline::wrap
//!            → Replacement → TextSpan
//! ```
//!
//! # Example
//!
//! ```
//! use markbar::editable::TextSpan;
//! use markbar::syntax::{toggle_syntax, Catalogue, Flavor, SyntaxKind};
//!
//! let bold = Catalogue::new(Flavor::Html).resolve(SyntaxKind::Bold).unwrap();
//! let span = TextSpan::from_visual("The |quick| brown fox");
//!
//! let wrapped = toggle_syntax(&span, &bold);
//! assert_eq!(wrapped.to_visual(), "The <b>|quick|</b> brown fox");
//! assert_eq!(toggle_syntax(&wrapped, &bold), span);
//! ```

mod catalogue;
mod descriptor;
mod inline;
mod lines;

use std::ops::Range;

pub use catalogue::{Catalogue, Flavor, SyntaxKind, DEFAULT_HEADER_LEVEL};
pub use descriptor::{LineFamily, SyntaxDescriptor, SyntaxError};

use crate::editable::TextSpan;

/// Replace `range` of the old text with `text`; `selection` is absolute in
/// the new text. Byte offsets throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Replacement {
    pub range: Range<usize>,
    pub text: String,
    pub selection: Range<usize>,
    /// Whether this edit took syntax away rather than adding it
    pub removed: bool,
}

impl Replacement {
    fn apply(self, text: &str) -> TextSpan {
        let mut value = String::with_capacity(text.len() + self.text.len());
        value.push_str(&text[..self.range.start]);
        value.push_str(&self.text);
        value.push_str(&text[self.range.end..]);
        TextSpan::from_byte_range(value, self.selection.start, self.selection.end)
    }
}

/// Apply or remove `syntax` around the selection of `span`.
///
/// # Panics
///
/// Panics when `syntax` fails [`SyntaxDescriptor::validate`]; use
/// [`try_toggle_syntax`] for descriptors that did not come from a
/// [`Catalogue`].
pub fn toggle_syntax(span: &TextSpan, syntax: &SyntaxDescriptor) -> TextSpan {
    if let Err(err) = syntax.validate() {
        panic!("toggle_syntax called with an unusable descriptor: {err}");
    }
    toggle_validated(span, syntax)
}

/// [`toggle_syntax`] that reports a malformed descriptor instead of panicking
pub fn try_toggle_syntax(span: &TextSpan, syntax: &SyntaxDescriptor) -> Result<TextSpan, SyntaxError> {
    syntax.validate()?;
    Ok(toggle_validated(span, syntax))
}

fn toggle_validated(span: &TextSpan, syntax: &SyntaxDescriptor) -> TextSpan {
    let text = span.text();
    let selection = span.byte_range();

    let replacement = if syntax.is_line_syntax() {
        lines::style_lines(text, selection, syntax)
    } else {
        inline::wrap(text, selection, syntax)
    };

    tracing::debug!(
        target: "syntax",
        removed = replacement.removed,
        start = replacement.range.start,
        end = replacement.range.end,
        "toggled syntax"
    );

    replacement.apply(text)
}

/// Blank-line padding needed so `range` sits in its own paragraph.
///
/// Returns (newlines to put before, newlines to put after); no padding is
/// added against the start or end of the buffer or against whitespace only.
pub(crate) fn newlines_around(text: &str, range: Range<usize>) -> (String, String) {
    let before = &text[..range.start];
    let after = &text[range.end..];

    let breaks_before = before.len() - before.trim_end_matches('\n').len();
    let breaks_after = after.len() - after.trim_start_matches('\n').len();

    let pad_before = if before.trim().is_empty() || breaks_before >= 2 {
        String::new()
    } else {
        "\n".repeat(2 - breaks_before)
    };
    let pad_after = if after.trim().is_empty() || breaks_after >= 2 {
        String::new()
    } else {
        "\n".repeat(2 - breaks_after)
    };

    (pad_before, pad_after)
}
