//! Configurable toolbar hotkeys
//!
//! This module provides a data-driven keybinding system that:
//! - Maps keystrokes to toolbar commands (apply a syntax, move the tab stop)
//! - Supports platform-specific modifier handling (Cmd on macOS, Ctrl elsewhere)
//! - Guards bindings with focus conditions (field vs. toolbar button)
//! - Enables user customization via YAML config files
//!
//! # Architecture
//!
//! ```text
//! key event → Keystroke → Keymap::lookup_with_context() → Command → ToolbarMsg
//! ```
//!
//! # Loading Keymaps
//!
//! ```
//! use markbar::keymap::{default_bindings, Command, KeyContext, Keymap, Keystroke};
//! use markbar::syntax::SyntaxKind;
//!
//! let keymap = Keymap::with_bindings(default_bindings());
//! let command = keymap.lookup_with_context(&Keystroke::cmd_char('b'), Some(&KeyContext::field(false)));
//! assert_eq!(command, Some(Command::ApplySyntax(SyntaxKind::Bold)));
//! ```

mod binding;
mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_code, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, load_with_overrides,
    merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};

#[cfg(test)]
mod tests;
