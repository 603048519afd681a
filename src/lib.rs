//! markbar - a selection-aware Markdown formatting toolbar
//!
//! This crate provides the syntax toggle engine, the roving-focus keyboard
//! controller and the Elm-style toolbar glue around them.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod focus;
pub mod keymap;
pub mod syntax;
pub mod toolbar;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::ToolbarConfig;
pub use editable::TextSpan;
pub use syntax::{toggle_syntax, Catalogue, Flavor, SyntaxDescriptor, SyntaxKind};
pub use toolbar::{Toolbar, ToolbarMsg};
