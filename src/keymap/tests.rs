//! Integration tests for the keymap system

use super::*;
use crate::syntax::SyntaxKind;

#[test]
fn test_embedded_yaml_parses() {
    let bindings = parse_keymap_yaml(get_default_keymap_yaml())
        .expect("Embedded keymap.yaml should parse successfully");

    assert!(!bindings.is_empty(), "Should have bindings");

    for kind in [SyntaxKind::Bold, SyntaxKind::Italic, SyntaxKind::Link] {
        assert!(
            bindings
                .iter()
                .any(|b| b.command == Command::ApplySyntax(kind)),
            "Should have a {kind} binding"
        );
    }
}

#[test]
fn test_keymap_lookup_formatting_in_field() {
    let keymap = Keymap::with_bindings(default_bindings());
    let field = KeyContext::field(true);

    assert_eq!(
        keymap.lookup_with_context(&Keystroke::cmd_char('b'), Some(&field)),
        Some(Command::ApplySyntax(SyntaxKind::Bold))
    );
    assert_eq!(
        keymap.lookup_with_context(&Keystroke::cmd_char('e'), Some(&field)),
        Some(Command::ApplySyntax(SyntaxKind::Code))
    );

    let ordered = Keystroke::new(KeyCode::Char('7'), Modifiers::cmd() | Modifiers::SHIFT);
    assert_eq!(
        keymap.lookup_with_context(&ordered, Some(&field)),
        Some(Command::ApplySyntax(SyntaxKind::OrderedList))
    );
}

#[test]
fn test_formatting_hotkeys_ignored_on_toolbar() {
    let keymap = Keymap::with_bindings(default_bindings());
    assert_eq!(
        keymap.lookup_with_context(&Keystroke::cmd_char('b'), Some(&KeyContext::toolbar())),
        None
    );
}

#[test]
fn test_keymap_lookup_arrow_keys_on_toolbar() {
    let keymap = Keymap::with_bindings(default_bindings());
    let toolbar = KeyContext::toolbar();

    let cases = [
        (KeyCode::Right, Command::FocusNext),
        (KeyCode::Down, Command::FocusNext),
        (KeyCode::Left, Command::FocusPrevious),
        (KeyCode::Up, Command::FocusPrevious),
        (KeyCode::Home, Command::FocusFirst),
        (KeyCode::End, Command::FocusLast),
    ];
    for (key, expected) in cases {
        assert_eq!(
            keymap.lookup_with_context(&Keystroke::key(key), Some(&toolbar)),
            Some(expected),
            "{key}"
        );
    }
}

#[test]
fn test_arrow_keys_fall_through_in_field() {
    let keymap = Keymap::with_bindings(default_bindings());
    let field = KeyContext::field(false);

    assert_eq!(
        keymap.lookup_with_context(&Keystroke::key(KeyCode::Right), Some(&field)),
        None
    );
    assert_eq!(
        keymap.lookup_with_context(&Keystroke::key(KeyCode::Home), Some(&field)),
        None
    );
}

#[test]
fn test_modified_arrow_is_not_navigation() {
    let keymap = Keymap::with_bindings(default_bindings());
    let shift_right = Keystroke::new(KeyCode::Right, Modifiers::SHIFT);
    assert_eq!(
        keymap.lookup_with_context(&shift_right, Some(&KeyContext::toolbar())),
        None
    );
}

#[test]
fn test_user_override_yaml() {
    let user = parse_keymap_yaml(
        r#"
bindings:
  - key: "cmd+b"
    command: Unbound
  - key: "cmd+u"
    command: underline
    when: [field_focused]
"#,
    )
    .unwrap();

    let keymap = Keymap::with_bindings(merge_bindings(default_bindings(), user));
    let field = KeyContext::field(false);

    assert_eq!(
        keymap.lookup_with_context(&Keystroke::cmd_char('b'), Some(&field)),
        None
    );
    assert_eq!(
        keymap.lookup_with_context(&Keystroke::cmd_char('u'), Some(&field)),
        Some(Command::ApplySyntax(SyntaxKind::Underline))
    );
}

#[test]
fn test_tooltip_for_bold() {
    let keymap = Keymap::with_bindings(default_bindings());
    let tooltip = keymap
        .display_for(Command::ApplySyntax(SyntaxKind::Bold))
        .unwrap();

    #[cfg(target_os = "macos")]
    assert_eq!(tooltip, "⌘B");

    #[cfg(not(target_os = "macos"))]
    assert_eq!(tooltip, "Ctrl+B");
}
