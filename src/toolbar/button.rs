//! Toolbar buttons

use crate::config::ButtonConfig;
use crate::focus::FocusCandidate;
use crate::syntax::{SyntaxError, SyntaxKind};

/// What pressing a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Toggles a syntax on the field
    Syntax(SyntaxKind),
    /// Collaborator-defined element; focusable, applies nothing
    Custom,
}

/// One button in the toolbar, as seen by the roving focus controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    pub kind: ButtonKind,
    pub label: String,
    pub hidden: bool,
    tab_stop: bool,
}

impl ToolbarButton {
    pub fn syntax(kind: SyntaxKind) -> Self {
        Self {
            kind: ButtonKind::Syntax(kind),
            label: kind.to_string(),
            hidden: false,
            tab_stop: false,
        }
    }

    pub fn custom(label: impl Into<String>) -> Self {
        Self {
            kind: ButtonKind::Custom,
            label: label.into(),
            hidden: false,
            tab_stop: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Build a button from its config entry
    pub fn from_config(config: &ButtonConfig, default_level: u8) -> Result<Self, SyntaxError> {
        let mut button = match config.kind(default_level)? {
            Some(kind) => Self::syntax(kind),
            None => Self::custom("custom"),
        };
        if let Some(ref label) = config.label {
            button.label = label.clone();
        }
        button.hidden = config.hidden;
        Ok(button)
    }

    /// The syntax this button applies, if any
    pub fn syntax_kind(&self) -> Option<SyntaxKind> {
        match self.kind {
            ButtonKind::Syntax(kind) => Some(kind),
            ButtonKind::Custom => None,
        }
    }
}

impl FocusCandidate for ToolbarButton {
    fn is_focusable(&self) -> bool {
        !self.hidden
    }

    fn is_tab_stop(&self) -> bool {
        self.tab_stop
    }

    fn set_tab_stop(&mut self, tab_stop: bool) {
        self.tab_stop = tab_stop;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let hidden_h5 = ButtonConfig {
            level: Some(5),
            hidden: true,
            ..ButtonConfig::syntax("header")
        };
        let button = ToolbarButton::from_config(&hidden_h5, 3).unwrap();
        assert_eq!(button.syntax_kind(), Some(SyntaxKind::Header { level: 5 }));
        assert_eq!(button.label, "h5");
        assert!(!button.is_focusable());

        let other = ButtonConfig {
            label: Some("Other button".to_string()),
            ..ButtonConfig::default()
        };
        let button = ToolbarButton::from_config(&other, 3).unwrap();
        assert_eq!(button.kind, ButtonKind::Custom);
        assert_eq!(button.label, "Other button");
        assert!(button.is_focusable());
    }

    #[test]
    fn test_unknown_syntax_is_rejected() {
        assert_eq!(
            ToolbarButton::from_config(&ButtonConfig::syntax("blink"), 3),
            Err(SyntaxError::UnknownSyntax("blink".to_string()))
        );
    }
}
