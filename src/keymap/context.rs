//! Context system for conditional keybindings
//!
//! Lets the same key mean different things depending on where focus is:
//! arrows move the tab stop only while a toolbar button is focused.

use serde::Deserialize;

/// Context extracted from the toolbar model for keybinding evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// Whether the text field has input focus
    pub field_focused: bool,
    /// Whether one of the toolbar's buttons has input focus
    pub toolbar_focused: bool,
    /// Whether the field's selection is non-empty
    pub has_selection: bool,
}

impl KeyContext {
    /// Context for a key pressed inside the text field
    pub fn field(has_selection: bool) -> Self {
        Self {
            field_focused: true,
            toolbar_focused: false,
            has_selection,
        }
    }

    /// Context for a key pressed on a toolbar button
    pub fn toolbar() -> Self {
        Self {
            field_focused: false,
            toolbar_focused: true,
            has_selection: false,
        }
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    FieldFocused,
    ToolbarFocused,
    HasSelection,
    NoSelection,
}

impl Condition {
    /// Evaluate this condition against the current context
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::FieldFocused => ctx.field_focused,
            Condition::ToolbarFocused => ctx.toolbar_focused,
            Condition::HasSelection => ctx.has_selection,
            Condition::NoSelection => !ctx.has_selection,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = KeyContext::default();
        assert!(!ctx.field_focused);
        assert!(!ctx.toolbar_focused);
        assert!(!ctx.has_selection);
    }

    #[test]
    fn test_condition_focus() {
        let field = KeyContext::field(false);
        assert!(Condition::FieldFocused.evaluate(&field));
        assert!(!Condition::ToolbarFocused.evaluate(&field));

        let toolbar = KeyContext::toolbar();
        assert!(Condition::ToolbarFocused.evaluate(&toolbar));
        assert!(!Condition::FieldFocused.evaluate(&toolbar));
    }

    #[test]
    fn test_condition_has_selection() {
        assert!(Condition::NoSelection.evaluate(&KeyContext::field(false)));
        assert!(Condition::HasSelection.evaluate(&KeyContext::field(true)));
        assert!(!Condition::NoSelection.evaluate(&KeyContext::field(true)));
    }

    #[test]
    fn test_evaluate_all_empty() {
        assert!(Condition::evaluate_all(&[], &KeyContext::default()));
    }

    #[test]
    fn test_evaluate_all_and_logic() {
        let ctx = KeyContext::field(true);
        assert!(Condition::evaluate_all(
            &[Condition::FieldFocused, Condition::HasSelection],
            &ctx
        ));
        assert!(!Condition::evaluate_all(
            &[Condition::FieldFocused, Condition::ToolbarFocused],
            &ctx
        ));
    }
}
