//! Headers, quotes and lists applied per line

mod common;

use common::*;
use markbar::syntax::SyntaxKind;

fn h(level: u8) -> SyntaxKind {
    SyntaxKind::Header { level }
}

// ========================================================================
// Headers
// ========================================================================

#[test]
fn test_header_inserts_marker_and_keeps_cursor_on_text() {
    assert_eq!(apply_markdown(h(1), "|Title"), "# |Title");
    assert_eq!(apply_markdown(h(3), "Ti|tle"), "### Ti|tle");
}

#[test]
fn test_header_toggles_off() {
    assert_eq!(apply_markdown(h(2), "## |Title|"), "|Title|");
    assert_eq!(apply_markdown(h(2), "## Ti|tle"), "Ti|tle");
}

#[test]
fn test_header_replaces_other_level() {
    assert_eq!(apply_markdown(h(1), "### |Title|"), "# |Title|");
    assert_eq!(apply_markdown(h(4), "# Ti|tle"), "#### Ti|tle");
}

#[test]
fn test_header_only_touches_cursor_line() {
    assert_eq!(
        apply_markdown(h(2), "intro\nTi|tle\noutro"),
        "intro\n## Ti|tle\noutro"
    );
}

#[test]
fn test_hashtag_is_not_a_header() {
    assert_eq!(apply_markdown(h(1), "#tag|"), "# #tag|");
}

#[test]
fn test_header_button_without_level_uses_default() {
    let mut toolbar = sample_toolbar();
    set_visual(&mut toolbar, "|Title");
    click(&mut toolbar, "header");
    assert_eq!(visual(&toolbar), "### |Title");
}

#[test]
fn test_out_of_range_header_button_does_nothing() {
    let mut toolbar = sample_toolbar();
    set_visual(&mut toolbar, "|Title");
    assert_eq!(click(&mut toolbar, "h10"), None);
    assert_eq!(visual(&toolbar), "|Title");
}

// ========================================================================
// Quotes
// ========================================================================

#[test]
fn test_quote_every_selected_line() {
    assert_eq!(
        apply_markdown(SyntaxKind::Quote, "|one\ntwo|"),
        "> |one\n> two|"
    );
}

#[test]
fn test_quote_toggles_off() {
    assert_eq!(
        apply_markdown(SyntaxKind::Quote, "> |one\n> two|"),
        "|one\ntwo|"
    );
}

#[test]
fn test_quote_pads_with_blank_lines() {
    assert_eq!(
        apply_markdown(SyntaxKind::Quote, "intro\n|quoted|\noutro"),
        "intro\n\n> |quoted|\n\noutro"
    );
}

#[test]
fn test_quote_selection_ending_after_line_break() {
    assert_eq!(
        apply_markdown(SyntaxKind::Quote, "|one\n|two"),
        "> |one\n\n|two"
    );
    assert_eq!(
        apply_markdown(SyntaxKind::Quote, "intro\n|one\n|outro"),
        "intro\n\n> |one\n\n|outro"
    );
}

// ========================================================================
// Lists
// ========================================================================

#[test]
fn test_unordered_list() {
    assert_eq!(
        apply_markdown(SyntaxKind::UnorderedList, "|one\ntwo|"),
        "- |one\n- two|"
    );
    assert_eq!(
        apply_markdown(SyntaxKind::UnorderedList, "- |one\n- two|"),
        "|one\ntwo|"
    );
}

#[test]
fn test_ordered_list_numbers_lines() {
    assert_eq!(
        apply_markdown(SyntaxKind::OrderedList, "|one\ntwo\nthree|"),
        "1. |one\n2. two\n3. three|"
    );
    assert_eq!(
        apply_markdown(SyntaxKind::OrderedList, "1. |one\n2. two\n3. three|"),
        "|one\ntwo\nthree|"
    );
}

#[test]
fn test_task_list() {
    assert_eq!(
        apply_markdown(SyntaxKind::TaskList, "|buy milk|"),
        "- [ ] |buy milk|"
    );
    assert_eq!(
        apply_markdown(SyntaxKind::TaskList, "- [ ] |buy milk|"),
        "|buy milk|"
    );
}

#[test]
fn test_list_styles_replace_each_other() {
    assert_eq!(
        apply_markdown(SyntaxKind::OrderedList, "- |one\n- two|"),
        "1. |one\n2. two|"
    );
    assert_eq!(
        apply_markdown(SyntaxKind::UnorderedList, "1. |one\n2. two|"),
        "- |one\n- two|"
    );
    assert_eq!(
        apply_markdown(SyntaxKind::TaskList, "* |item|"),
        "- [ ] |item|"
    );
}

#[test]
fn test_list_pads_with_blank_lines() {
    assert_eq!(
        apply_markdown(SyntaxKind::UnorderedList, "intro\n|item|\noutro"),
        "intro\n\n- |item|\n\noutro"
    );
}

#[test]
fn test_mixed_lines_get_marker_everywhere() {
    assert_eq!(
        apply_markdown(SyntaxKind::UnorderedList, "- |one\ntwo|"),
        "- |one\n- two|"
    );
}

#[test]
fn test_cursor_on_empty_line() {
    assert_eq!(apply_markdown(SyntaxKind::UnorderedList, "|"), "- |");
    assert_eq!(apply_markdown(SyntaxKind::OrderedList, "|"), "1. |");
}
