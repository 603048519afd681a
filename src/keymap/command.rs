//! Command enum representing every action a toolbar hotkey can trigger
//!
//! Commands are the bridge between keybindings and the toolbar's message
//! loop: `ApplySyntax` becomes a toggle on the field, the focus commands
//! move the roving tab stop.

use std::fmt;
use std::str::FromStr;

use crate::focus::Navigation;
use crate::syntax::SyntaxKind;

/// All toolbar commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Toggle a syntax around the field's selection
    ApplySyntax(SyntaxKind),

    /// Move the tab stop to the next visible button
    FocusNext,
    /// Move the tab stop to the previous visible button
    FocusPrevious,
    /// Move the tab stop to the first visible button
    FocusFirst,
    /// Move the tab stop to the last visible button
    FocusLast,

    /// Explicitly does nothing; removes a default binding when merged
    Unbound,
}

impl Command {
    /// The roving focus move for navigation commands
    pub fn navigation(self) -> Option<Navigation> {
        match self {
            Command::FocusNext => Some(Navigation::Next),
            Command::FocusPrevious => Some(Navigation::Previous),
            Command::FocusFirst => Some(Navigation::First),
            Command::FocusLast => Some(Navigation::Last),
            Command::ApplySyntax(_) | Command::Unbound => None,
        }
    }

    /// Get a display name for this command (tooltips, `--help` listings)
    pub fn display_name(self) -> String {
        match self {
            Command::ApplySyntax(SyntaxKind::Header { level }) => format!("Heading {}", level),
            Command::ApplySyntax(kind) => {
                let name = kind.name().replace('-', " ");
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            Command::FocusNext => "Focus Next Button".to_string(),
            Command::FocusPrevious => "Focus Previous Button".to_string(),
            Command::FocusFirst => "Focus First Button".to_string(),
            Command::FocusLast => "Focus Last Button".to_string(),
            Command::Unbound => "Unbound".to_string(),
        }
    }
}

impl FromStr for Command {
    type Err = ();

    /// Accepts `FocusNext`-style names, `Unbound`, or any syntax name
    /// (`bold`, `h2`, `ordered-list`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FocusNext" => Ok(Command::FocusNext),
            "FocusPrevious" => Ok(Command::FocusPrevious),
            "FocusFirst" => Ok(Command::FocusFirst),
            "FocusLast" => Ok(Command::FocusLast),
            "Unbound" => Ok(Command::Unbound),
            other => other
                .parse::<SyntaxKind>()
                .map(Command::ApplySyntax)
                .map_err(|_| ()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ApplySyntax(kind) => write!(f, "{}", kind),
            Command::FocusNext => f.write_str("FocusNext"),
            Command::FocusPrevious => f.write_str("FocusPrevious"),
            Command::FocusFirst => f.write_str("FocusFirst"),
            Command::FocusLast => f.write_str("FocusLast"),
            Command::Unbound => f.write_str("Unbound"),
        }
    }
}
