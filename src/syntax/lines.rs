//! Line syntaxes: headers, quotes, bulleted/numbered/task lists.
//!
//! The marker goes at the start of every line the selection touches.

use std::ops::Range;

use super::descriptor::{LineFamily, SyntaxDescriptor};
use super::{newlines_around, Replacement};
use crate::util::text::{line_end, line_start};

/// Kinds of list marker recognised at the start of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListMarker {
    Bullet,
    Task,
    Ordered,
}

/// Per-line bookkeeping used to map old offsets onto the new block
struct LineEdit {
    old_start: usize,
    old_len: usize,
    removed: usize,
    inserted: usize,
    new_start: usize,
}

pub(crate) fn style_lines(text: &str, selection: Range<usize>, syntax: &SyntaxDescriptor) -> Replacement {
    let block = affected_lines(text, &selection);
    let lines: Vec<&str> = text[block.clone()].split('\n').collect();

    let remove = lines
        .iter()
        .all(|line| exact_marker(line, syntax).is_some());

    let mut new_block = String::with_capacity(block.len() + lines.len() * 4);
    let mut edits = Vec::with_capacity(lines.len());
    let mut old_start = 0;

    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            new_block.push('\n');
        }

        let (removed, marker) = if remove {
            (exact_marker(line, syntax).unwrap_or(0), String::new())
        } else {
            (family_marker(line, syntax), marker_for(idx, syntax))
        };

        edits.push(LineEdit {
            old_start,
            old_len: line.len(),
            removed,
            inserted: marker.len(),
            new_start: new_block.len(),
        });

        new_block.push_str(&marker);
        new_block.push_str(&line[removed..]);
        old_start += line.len() + 1;
    }

    let (pad_before, pad_after) = if syntax.surround_with_newlines && !remove {
        newlines_around(text, block.clone())
    } else {
        (String::new(), String::new())
    };

    // An end past the block (right after its line break) skips the padding
    let base = block.start + pad_before.len();
    let map = |offset: usize| {
        let tail = if offset > block.end { pad_after.len() } else { 0 };
        base + map_offset(&edits, offset - block.start) + tail
    };
    let new_selection = map(selection.start)..map(selection.end);

    Replacement {
        range: block,
        text: format!("{pad_before}{new_block}{pad_after}"),
        selection: new_selection,
        removed: remove,
    }
}

/// Whole lines intersected by the selection. A selection ending right after
/// a line break does not pull in the following line.
fn affected_lines(text: &str, selection: &Range<usize>) -> Range<usize> {
    let start = line_start(text, selection.start);
    let last = if selection.end > selection.start && text[..selection.end].ends_with('\n') {
        selection.end - 1
    } else {
        selection.end
    };
    start..line_end(text, last)
}

fn map_offset(edits: &[LineEdit], offset: usize) -> usize {
    let edit = edits
        .iter()
        .find(|edit| offset <= edit.old_start + edit.old_len)
        .or_else(|| edits.last());

    match edit {
        Some(edit) => {
            let column = offset.saturating_sub(edit.old_start);
            edit.new_start + edit.inserted + column.saturating_sub(edit.removed)
        }
        None => offset,
    }
}

fn marker_for(idx: usize, syntax: &SyntaxDescriptor) -> String {
    if syntax.ordered_list {
        format!("{}. ", idx + 1)
    } else {
        syntax.block_prefix.clone()
    }
}

/// Length of this descriptor's own marker at the start of `line`
fn exact_marker(line: &str, syntax: &SyntaxDescriptor) -> Option<usize> {
    match syntax.line_family {
        Some(LineFamily::List) => {
            let (kind, len) = list_marker(line)?;
            (kind == own_list_kind(syntax)).then_some(len)
        }
        Some(LineFamily::Header) => {
            header_marker(line).filter(|&len| line[..len] == *syntax.block_prefix)
        }
        _ => line
            .starts_with(syntax.block_prefix.as_str())
            .then_some(syntax.block_prefix.len()),
    }
}

/// Length of a marker from the same family that insertion should replace
fn family_marker(line: &str, syntax: &SyntaxDescriptor) -> usize {
    match syntax.line_family {
        Some(LineFamily::List) => list_marker(line).map(|(_, len)| len).unwrap_or(0),
        Some(LineFamily::Header) => header_marker(line).unwrap_or(0),
        _ => 0,
    }
}

fn own_list_kind(syntax: &SyntaxDescriptor) -> ListMarker {
    if syntax.ordered_list {
        ListMarker::Ordered
    } else {
        list_marker(&syntax.block_prefix)
            .map(|(kind, _)| kind)
            .unwrap_or(ListMarker::Bullet)
    }
}

fn list_marker(line: &str) -> Option<(ListMarker, usize)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && line[digits..].starts_with(". ") {
        return Some((ListMarker::Ordered, digits + 2));
    }

    if ["- [ ] ", "- [x] ", "- [X] "]
        .iter()
        .any(|task| line.starts_with(task))
    {
        return Some((ListMarker::Task, 6));
    }

    if ["- ", "* ", "+ "].iter().any(|bullet| line.starts_with(bullet)) {
        return Some((ListMarker::Bullet, 2));
    }

    None
}

/// `#`..`######` followed by a space
fn header_marker(line: &str) -> Option<usize> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    ((1..=6).contains(&hashes) && line[hashes..].starts_with(' ')).then_some(hashes + 1)
}
