//! Toolbar model - the field span, the buttons and input focus

use crate::config::ToolbarConfig;
use crate::editable::TextSpan;
use crate::focus::{self, FocusCandidate};
use crate::keymap::{Command, KeyContext, Keymap};
use crate::syntax::{Catalogue, SyntaxError};

use super::button::ToolbarButton;

/// Where input focus currently is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    None,
    Field,
    Button(usize),
}

/// The complete toolbar state
#[derive(Debug, Clone)]
pub struct Toolbar {
    pub(super) field: TextSpan,
    pub(super) buttons: Vec<ToolbarButton>,
    pub(super) keymap: Keymap,
    pub(super) catalogue: Catalogue,
    pub(super) focus: Focus,
}

impl Toolbar {
    /// Create a toolbar over an empty field; the first focusable button
    /// becomes the tab stop
    pub fn new(buttons: Vec<ToolbarButton>, catalogue: Catalogue, keymap: Keymap) -> Self {
        let mut toolbar = Self {
            field: TextSpan::default(),
            buttons,
            keymap,
            catalogue,
            focus: Focus::None,
        };
        focus::normalize(&mut toolbar.buttons);
        toolbar
    }

    /// Create a toolbar from the configured layout and flavor
    pub fn from_config(config: &ToolbarConfig, keymap: Keymap) -> Result<Self, SyntaxError> {
        let buttons = config
            .buttons
            .iter()
            .map(|button| ToolbarButton::from_config(button, config.header_level))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(buttons, Catalogue::new(config.flavor), keymap))
    }

    pub fn field(&self) -> &TextSpan {
        &self.field
    }

    pub fn buttons(&self) -> &[ToolbarButton] {
        &self.buttons
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// The button holding the tab stop
    pub fn active_button(&self) -> Option<usize> {
        focus::active(&self.buttons)
    }

    /// Index of the first button labelled `label`
    pub fn position(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Buttons currently carrying the tab stop; exactly one while any
    /// button is visible
    pub fn tab_stops(&self) -> Vec<usize> {
        self.buttons
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_focusable() && b.is_tab_stop())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Context for keybinding conditions
    pub fn key_context(&self) -> KeyContext {
        match self.focus {
            Focus::Field => KeyContext::field(!self.field.is_cursor()),
            Focus::Button(_) => KeyContext::toolbar(),
            Focus::None => KeyContext::default(),
        }
    }

    /// Button label plus its hotkey, e.g. `bold (Ctrl+B)`
    pub fn tooltip(&self, index: usize) -> Option<String> {
        let button = self.buttons.get(index)?;
        let hotkey = button
            .syntax_kind()
            .and_then(|kind| self.keymap.display_for(Command::ApplySyntax(kind)));

        Some(match hotkey {
            Some(hotkey) => format!("{} ({})", button.label, hotkey),
            None => button.label.clone(),
        })
    }
}
