//! Inline wrapping: bold, italic, code, links, mentions.
//!
//! All offsets here are byte offsets into the field value.

use std::ops::Range;

use super::descriptor::SyntaxDescriptor;
use super::{newlines_around, Replacement};
use crate::util::text::{is_url, split_whitespace_edges, word_range};

/// Wrap or unwrap the selection with the descriptor's inline tokens
pub(crate) fn wrap(text: &str, selection: Range<usize>, syntax: &SyntaxDescriptor) -> Replacement {
    let original = selection.clone();
    let (mut prefix, suffix) = tokens_for(&text[selection.clone()], syntax);

    let range = if selection.is_empty() {
        word_range(text, selection.start)
    } else {
        selection
    };

    // A prefix already sitting right before the range is a removal candidate
    if syntax.prefix_space
        && glued_to_previous(text, range.start)
        && !text[..range.start].ends_with(prefix.as_str())
    {
        prefix.insert(0, ' ');
    }

    // Selection content carries the tokens itself
    if let Some(inner) = strip_tokens(&text[range.clone()], &prefix, &suffix) {
        return unwrap(range, inner, &original, prefix.len());
    }

    // Tokens sit right outside a real selection
    if !original.is_empty() && text[range.end..].starts_with(suffix.as_str()) {
        if let Some(prefix_len) = neighbour_prefix(&text[..range.start], &prefix, syntax.prefix_space) {
            let outer = range.start - prefix_len..range.end + suffix.len();
            return unwrap(outer, &text[range], &original, prefix_len);
        }
    }

    let selected = &text[range.clone()];

    if let Some(placeholder) = syntax.active_placeholder() {
        if !selected.is_empty() {
            if let Some(replacement) = fill_placeholder(range.clone(), selected, &prefix, &suffix, placeholder) {
                return replacement;
            }
        }
    }

    insert(text, range, &original, &prefix, &suffix, syntax)
}

/// Pick the inline tokens, or the fenced form when the text spans lines
fn tokens_for(selected: &str, syntax: &SyntaxDescriptor) -> (String, String) {
    let measured = if syntax.trim_first {
        selected.trim()
    } else {
        selected
    };

    if measured.contains('\n') && syntax.has_multiline_form() {
        (
            format!("{}\n", syntax.multiline_prefix),
            format!("\n{}", syntax.multiline_suffix),
        )
    } else {
        (syntax.prefix.clone(), syntax.suffix.clone())
    }
}

fn glued_to_previous(text: &str, offset: usize) -> bool {
    text[..offset]
        .chars()
        .next_back()
        .is_some_and(|ch| !ch.is_whitespace())
}

/// Length of the prefix ending `before`. For spaced syntaxes a separating
/// space in front of the bare prefix is taken along with it.
fn neighbour_prefix(before: &str, prefix: &str, spaced: bool) -> Option<usize> {
    if spaced {
        let bare = prefix.strip_prefix(' ').unwrap_or(prefix);
        if before
            .strip_suffix(bare)
            .is_some_and(|rest| rest.ends_with(' '))
        {
            return Some(bare.len() + 1);
        }
    }

    before.ends_with(prefix).then_some(prefix.len())
}

/// Inner text when `candidate` starts with `prefix` and ends with `suffix`
/// without the two overlapping
fn strip_tokens<'a>(candidate: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    if prefix.is_empty() && suffix.is_empty() {
        return None;
    }
    if candidate.len() < prefix.len() + suffix.len() {
        return None;
    }
    if !candidate.starts_with(prefix) || !candidate.ends_with(suffix) {
        return None;
    }
    Some(&candidate[prefix.len()..candidate.len() - suffix.len()])
}

fn unwrap(outer: Range<usize>, inner: &str, original: &Range<usize>, prefix_len: usize) -> Replacement {
    let inner_range = outer.start..outer.start + inner.len();

    let selection = if original.is_empty() {
        let cursor = original
            .start
            .saturating_sub(prefix_len)
            .clamp(inner_range.start, inner_range.end);
        cursor..cursor
    } else {
        inner_range
    };

    Replacement {
        range: outer,
        text: inner.to_string(),
        selection,
        removed: true,
    }
}

/// `[text](|url|)` for plain text, `[|](https://..)` for a URL
fn fill_placeholder(
    range: Range<usize>,
    selected: &str,
    prefix: &str,
    suffix: &str,
    placeholder: &str,
) -> Option<Replacement> {
    if is_url(selected) {
        let suffix = suffix.replacen(placeholder, selected, 1);
        let cursor = range.start + prefix.len();
        return Some(Replacement {
            range,
            text: format!("{prefix}{suffix}"),
            selection: cursor..cursor,
            removed: false,
        });
    }

    let slot = suffix.find(placeholder)?;
    let start = range.start + prefix.len() + selected.len() + slot;
    Some(Replacement {
        range,
        text: format!("{prefix}{selected}{suffix}"),
        selection: start..start + placeholder.len(),
        removed: false,
    })
}

fn insert(
    text: &str,
    range: Range<usize>,
    original: &Range<usize>,
    prefix: &str,
    suffix: &str,
    syntax: &SyntaxDescriptor,
) -> Replacement {
    let selected = &text[range.clone()];
    let (lead, inner, trail) = if syntax.trim_first {
        split_whitespace_edges(selected)
    } else {
        ("", selected, "")
    };

    let (pad_before, pad_after) = if syntax.surround_with_newlines {
        newlines_around(text, range.clone())
    } else {
        (String::new(), String::new())
    };

    let selection = if original.is_empty() {
        let cursor = original.start + pad_before.len() + prefix.len();
        cursor..cursor
    } else {
        let start = range.start + pad_before.len() + lead.len() + prefix.len();
        start..start + inner.len()
    };

    Replacement {
        range,
        text: format!("{pad_before}{lead}{prefix}{inner}{suffix}{trail}{pad_after}"),
        selection,
        removed: false,
    }
}
