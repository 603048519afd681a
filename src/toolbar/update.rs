//! Update function for the toolbar's Elm-style loop
//!
//! All state transformations flow through [`update`].

use crate::focus::{self, FocusCandidate, Navigation};
use crate::keymap::{Command, Keystroke};
use crate::syntax::{toggle_syntax, SyntaxKind};

use super::button::ButtonKind;
use super::messages::{ToolbarEvent, ToolbarMsg};
use super::model::{Focus, Toolbar};

/// Apply one message to the toolbar
///
/// Returns what the collaborator has to reflect (new field value, focus on a
/// button), or `None` when nothing visible changed.
pub fn update(toolbar: &mut Toolbar, msg: ToolbarMsg) -> Option<ToolbarEvent> {
    tracing::trace!(?msg, focus = ?toolbar.focus, "toolbar update");

    match msg {
        ToolbarMsg::Click(index) => click(toolbar, index),
        ToolbarMsg::KeyDown(keystroke) => key_down(toolbar, keystroke),
        ToolbarMsg::FocusField => {
            toolbar.focus = Focus::Field;
            None
        }
        ToolbarMsg::FocusButton(index) => {
            if !toolbar.buttons.get(index)?.is_focusable() {
                return None;
            }
            focus::activate(&mut toolbar.buttons, index);
            toolbar.focus = Focus::Button(index);
            Some(ToolbarEvent::FocusMoved(index))
        }
        ToolbarMsg::Blur => {
            toolbar.focus = Focus::None;
            None
        }
        ToolbarMsg::SetField(span) => {
            toolbar.field = span;
            None
        }
        ToolbarMsg::SetHidden { index, hidden } => {
            toolbar.buttons.get_mut(index)?.hidden = hidden;
            let active = focus::normalize(&mut toolbar.buttons);
            // Input focus can't stay on a button that just disappeared
            if toolbar.focus == Focus::Button(index) && hidden {
                toolbar.focus = active.map_or(Focus::None, Focus::Button);
                return active.map(ToolbarEvent::FocusMoved);
            }
            None
        }
    }
}

fn click(toolbar: &mut Toolbar, index: usize) -> Option<ToolbarEvent> {
    let button = toolbar.buttons.get(index)?;
    if !button.is_focusable() {
        return None;
    }

    let kind = button.kind;
    focus::activate(&mut toolbar.buttons, index);

    match kind {
        ButtonKind::Syntax(kind) => apply_syntax(toolbar, kind),
        ButtonKind::Custom => {
            toolbar.focus = Focus::Button(index);
            Some(ToolbarEvent::CustomClicked(index))
        }
    }
}

fn key_down(toolbar: &mut Toolbar, keystroke: Keystroke) -> Option<ToolbarEvent> {
    let context = toolbar.key_context();
    let command = toolbar
        .keymap
        .lookup_with_context(&keystroke, Some(&context))?;

    tracing::debug!(%keystroke, %command, "hotkey");

    match command {
        Command::ApplySyntax(kind) => apply_syntax(toolbar, kind),
        command => navigate(toolbar, command.navigation()?),
    }
}

/// Toggle `kind` on the field and hand input focus back to it
fn apply_syntax(toolbar: &mut Toolbar, kind: SyntaxKind) -> Option<ToolbarEvent> {
    let Some(descriptor) = toolbar.catalogue.resolve(kind) else {
        tracing::debug!(%kind, "syntax has no descriptor, ignoring");
        return None;
    };

    toolbar.field = toggle_syntax(&toolbar.field, &descriptor);
    toolbar.focus = Focus::Field;
    Some(ToolbarEvent::FieldChanged)
}

/// Move the tab stop and input focus together
fn navigate(toolbar: &mut Toolbar, navigation: Navigation) -> Option<ToolbarEvent> {
    let current = match toolbar.focus {
        Focus::Button(index) => index,
        Focus::Field | Focus::None => focus::active(&toolbar.buttons)?,
    };

    let target = focus::navigate(&mut toolbar.buttons, current, navigation)?;
    toolbar.focus = Focus::Button(target);
    Some(ToolbarEvent::FocusMoved(target))
}
