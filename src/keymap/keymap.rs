//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    /// All registered bindings
    bindings: Vec<Keybinding>,
    /// Fast lookup (indices into bindings). Multiple bindings can share the
    /// same keystroke with different conditions
    lookup: HashMap<Keystroke, Vec<usize>>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding to the keymap
    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.entry(binding.keystroke).or_default().push(idx);
        self.bindings.push(binding);
    }

    /// Look up a keystroke, ignoring conditional bindings
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup_with_context(keystroke, None)
    }

    /// Look up a keystroke with context for conditional bindings
    ///
    /// Bindings with matching conditions win over unconditional ones; among
    /// equals the first registered wins. `Unbound` is never returned.
    pub fn lookup_with_context(
        &self,
        keystroke: &Keystroke,
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        let indices = self.lookup.get(keystroke)?;
        self.find_matching_binding(indices, context)
            .filter(|command| *command != Command::Unbound)
    }

    /// Find first binding that matches the context
    fn find_matching_binding(
        &self,
        indices: &[usize],
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        // First pass: conditional bindings whose conditions hold
        if let Some(ctx) = context {
            for &idx in indices {
                let binding = &self.bindings[idx];
                if let Some(ref conditions) = binding.when {
                    if Condition::evaluate_all(conditions, ctx) {
                        return Some(binding.command);
                    }
                }
            }
        }

        // Second pass: unconditional bindings
        indices
            .iter()
            .map(|&idx| &self.bindings[idx])
            .find(|binding| binding.when.is_none())
            .map(|binding| binding.command)
    }

    /// Get all bindings
    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// Get the keybinding for a command (first match)
    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings.iter().find(|b| b.command == command)
    }

    /// Get display string for a command's keybinding, for button tooltips
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.binding_for(command).map(|b| b.display_string())
    }
}
