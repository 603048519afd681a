//! Command-line argument parsing for markbar
//!
//! Supports:
//! - Toggling a syntax on a span written in visual notation (`apply`)
//! - Pressing a hotkey inside the field (`press`)
//! - Walking the toolbar's roving focus with navigation keys (`navigate`)

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::editable::TextSpan;
use crate::keymap::{parse_key_string, Keystroke};
use crate::syntax::{Flavor, SyntaxKind};

/// Markdown toolbar formatting from the terminal
///
/// Spans are written in visual notation: `"The |quick| fox"` selects
/// `quick`, a single `|` is a cursor.
#[derive(Parser, Debug)]
#[command(name = "markbar", version, about = "Markdown toolbar formatting from the terminal")]
pub struct CliArgs {
    /// Token set for emphasis syntaxes (overrides config.yaml)
    #[arg(long, global = true, value_name = "FLAVOR")]
    pub flavor: Option<Flavor>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Toolbar config file to use instead of ~/.config/markbar/config.yaml
    #[arg(long, global = true, alias = "layout", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Toggle a syntax on a span: `markbar apply bold "The |quick| fox"`
    Apply {
        /// Syntax name (bold, italic, h1, header, quote, code, link, ...)
        syntax: String,
        /// The field in visual notation
        visual: String,
        /// Header level for `header`
        #[arg(long, value_name = "N")]
        level: Option<u8>,
    },

    /// Press a hotkey in the field: `markbar press cmd+b "The |quick| fox"`
    Press {
        /// Key like `cmd+b` or `ctrl+shift+7`
        key: String,
        /// The field in visual notation
        visual: String,
    },

    /// Press navigation keys on the toolbar, starting from the active button
    Navigate {
        /// Keys like `ArrowRight`, `left`, `Home`
        #[arg(required = true, value_name = "KEY")]
        keys: Vec<String>,
    },
}

/// What to run, parsed and validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Apply { kind: SyntaxKind, span: TextSpan },
    Press { keystroke: Keystroke, span: TextSpan },
    Navigate { keystrokes: Vec<Keystroke> },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub request: Request,
    pub flavor: Option<Flavor>,
    pub json: bool,
    pub config_path: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into a validated run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let request = match self.command {
            CliCommand::Apply {
                syntax,
                visual,
                level,
            } => Request::Apply {
                kind: SyntaxKind::from_name(&syntax, level).map_err(|e| e.to_string())?,
                span: TextSpan::from_visual(&visual),
            },
            CliCommand::Press { key, visual } => Request::Press {
                keystroke: parse_key_string(&key).map_err(|e| e.to_string())?,
                span: TextSpan::from_visual(&visual),
            },
            CliCommand::Navigate { keys } => Request::Navigate {
                keystrokes: keys
                    .iter()
                    .map(|key| parse_key_string(key).map_err(|e| e.to_string()))
                    .collect::<Result<_, _>>()?,
            },
        };

        Ok(RunConfig {
            request,
            flavor: self.flavor,
            json: self.json,
            config_path: self.config,
        })
    }
}
