//! Message types for the toolbar's update loop
//!
//! All state changes flow through these message types.

use crate::editable::TextSpan;
use crate::keymap::Keystroke;

/// Input the toolbar reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarMsg {
    /// A button was clicked
    Click(usize),
    /// A key was pressed while the field or a button had focus
    KeyDown(Keystroke),
    /// The text field received input focus
    FocusField,
    /// A button received input focus (pointer or Tab)
    FocusButton(usize),
    /// Input focus left both the field and the toolbar
    Blur,
    /// The field's text or selection changed outside the toolbar
    SetField(TextSpan),
    /// A button was shown or hidden
    SetHidden { index: usize, hidden: bool },
}

/// What the collaborator has to reflect after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarEvent {
    /// The field's text and selection were replaced; input focus is on the field
    FieldChanged,
    /// The tab stop and input focus moved to this button
    FocusMoved(usize),
    /// A custom button was clicked; the collaborator handles it
    CustomClicked(usize),
}
