//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use markbar::editable::TextSpan;
use markbar::keymap::{default_bindings, KeyCode, Keymap, Keystroke};
use markbar::syntax::{toggle_syntax, Catalogue, Flavor, SyntaxKind};
use markbar::toolbar::{update, Toolbar, ToolbarButton, ToolbarEvent, ToolbarMsg};

/// Toggle `kind` on a span written in visual notation, returning the result
/// in visual notation
pub fn apply(flavor: Flavor, kind: SyntaxKind, visual: &str) -> String {
    let descriptor = Catalogue::new(flavor)
        .resolve(kind)
        .expect("syntax should resolve");
    toggle_syntax(&TextSpan::from_visual(visual), &descriptor).to_visual()
}

pub fn apply_html(kind: SyntaxKind, visual: &str) -> String {
    apply(Flavor::Html, kind, visual)
}

pub fn apply_markdown(kind: SyntaxKind, visual: &str) -> String {
    apply(Flavor::Markdown, kind, visual)
}

/// The button row used by the focus scenarios:
///
/// bold, header, h1, (hidden h5), h10, custom, italic, quote, code, link,
/// image, unordered list, ordered list, task list, mention, ref
pub fn sample_buttons() -> Vec<ToolbarButton> {
    vec![
        ToolbarButton::syntax(SyntaxKind::Bold),
        ToolbarButton::syntax(SyntaxKind::Header { level: 3 }).with_label("header"),
        ToolbarButton::syntax(SyntaxKind::Header { level: 1 }),
        ToolbarButton::syntax(SyntaxKind::Header { level: 5 }).hidden(),
        ToolbarButton::syntax(SyntaxKind::Header { level: 10 }),
        ToolbarButton::custom("Other button"),
        ToolbarButton::syntax(SyntaxKind::Italic),
        ToolbarButton::syntax(SyntaxKind::Quote),
        ToolbarButton::syntax(SyntaxKind::Code),
        ToolbarButton::syntax(SyntaxKind::Link),
        ToolbarButton::syntax(SyntaxKind::Image),
        ToolbarButton::syntax(SyntaxKind::UnorderedList),
        ToolbarButton::syntax(SyntaxKind::OrderedList),
        ToolbarButton::syntax(SyntaxKind::TaskList),
        ToolbarButton::syntax(SyntaxKind::Mention),
        ToolbarButton::syntax(SyntaxKind::Ref),
    ]
}

/// HTML-flavored toolbar with [`sample_buttons`] and the default hotkeys
pub fn sample_toolbar() -> Toolbar {
    Toolbar::new(
        sample_buttons(),
        Catalogue::new(Flavor::Html),
        Keymap::with_bindings(default_bindings()),
    )
}

/// Index of the button with `label`
pub fn button(toolbar: &Toolbar, label: &str) -> usize {
    toolbar
        .position(label)
        .unwrap_or_else(|| panic!("no button labelled {label}"))
}

pub fn set_visual(toolbar: &mut Toolbar, visual: &str) {
    update(toolbar, ToolbarMsg::SetField(TextSpan::from_visual(visual)));
}

pub fn visual(toolbar: &Toolbar) -> String {
    toolbar.field().to_visual()
}

pub fn click(toolbar: &mut Toolbar, label: &str) -> Option<ToolbarEvent> {
    let index = button(toolbar, label);
    update(toolbar, ToolbarMsg::Click(index))
}

/// Press `key` on whatever currently has input focus
pub fn press_key(toolbar: &mut Toolbar, key: KeyCode) -> Option<ToolbarEvent> {
    update(toolbar, ToolbarMsg::KeyDown(Keystroke::key(key)))
}

/// Press the platform hotkey (Cmd on macOS, Ctrl elsewhere) plus `c` in the field
pub fn press_hotkey(toolbar: &mut Toolbar, c: char) -> Option<ToolbarEvent> {
    update(toolbar, ToolbarMsg::FocusField);
    update(toolbar, ToolbarMsg::KeyDown(Keystroke::cmd_char(c)))
}
