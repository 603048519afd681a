//! Default toolbar hotkeys
//!
//! Loaded from the keymap.yaml embedded at compile time, falling back to the
//! hardcoded table below if that ever fails to parse.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};
use crate::config_paths;
use crate::syntax::SyntaxKind;

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap, e.g. for `markbar keys`-style listings
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. User config at `~/.config/markbar/keymap.yaml`
///
/// User bindings with `command: Unbound` remove matching default bindings.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let bindings = embedded_bindings();

    match config_paths::keymap_file() {
        Some(user_path) if user_path.exists() => load_with_overrides(bindings, &user_path),
        _ => bindings,
    }
}

/// Embedded defaults merged with the keymap file at `path`; a broken file is
/// logged and ignored
pub fn load_with_overrides(base: Vec<Keybinding>, path: &Path) -> Vec<Keybinding> {
    match load_keymap_file(path) {
        Ok(user_bindings) => {
            tracing::info!(
                "Merging user keymap from {} ({} bindings)",
                path.display(),
                user_bindings.len()
            );
            merge_bindings(base, user_bindings)
        }
        Err(e) => {
            tracing::warn!("Failed to load user keymap from {}: {}", path.display(), e);
            base
        }
    }
}

fn embedded_bindings() -> Vec<Keybinding> {
    match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    }
}

/// Merge user bindings into base bindings
///
/// - same keystroke + conditions replaces the base binding
/// - `Unbound` removes every base binding for that keystroke
/// - anything else is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        let existing_idx = result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke && b.when == user_binding.when);

        match existing_idx {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded default hotkeys for the current platform
///
/// Uses Cmd on macOS, Ctrl on Windows/Linux for the "command" modifier.
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let cmd_shift = cmd | Modifiers::SHIFT;
    let none = Modifiers::NONE;

    let syntax = |key: char, mods: Modifiers, kind: SyntaxKind| {
        bind(KeyCode::Char(key), mods, Command::ApplySyntax(kind))
            .when_single(Condition::FieldFocused)
    };
    let nav = |key: KeyCode, command: Command| {
        bind(key, none, command).when_single(Condition::ToolbarFocused)
    };

    vec![
        syntax('b', cmd, SyntaxKind::Bold),
        syntax('i', cmd, SyntaxKind::Italic),
        syntax('e', cmd, SyntaxKind::Code),
        syntax('k', cmd, SyntaxKind::Link),
        syntax('.', cmd_shift, SyntaxKind::Quote),
        syntax('8', cmd_shift, SyntaxKind::UnorderedList),
        syntax('7', cmd_shift, SyntaxKind::OrderedList),
        nav(KeyCode::Right, Command::FocusNext),
        nav(KeyCode::Down, Command::FocusNext),
        nav(KeyCode::Left, Command::FocusPrevious),
        nav(KeyCode::Up, Command::FocusPrevious),
        nav(KeyCode::Home, Command::FocusFirst),
        nav(KeyCode::End, Command::FocusLast),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
