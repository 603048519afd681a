//! Toolbar configuration persistence
//!
//! Stores user preferences in `~/.config/markbar/config.yaml`:
//!
//! ```yaml
//! flavor: html
//! header_level: 2
//! buttons:
//!   - syntax: bold
//!   - syntax: header
//!     level: 1
//!   - syntax: header
//!     level: 5
//!     hidden: true
//!   - label: Other button
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::syntax::{Flavor, SyntaxError, SyntaxKind, DEFAULT_HEADER_LEVEL};

/// Toolbar configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolbarConfig {
    /// Token set for bold/italic/underline/strikethrough
    #[serde(default)]
    pub flavor: Flavor,

    /// Level used by header buttons that don't name one
    #[serde(default = "default_header_level")]
    pub header_level: u8,

    /// Buttons in toolbar order
    #[serde(default = "default_buttons")]
    pub buttons: Vec<ButtonConfig>,
}

/// One toolbar button
///
/// A button without `syntax` is a custom element: it takes part in focus
/// navigation but applies nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
    /// Header level; only meaningful for `syntax: header`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

impl ButtonConfig {
    pub fn syntax(name: &str) -> Self {
        Self {
            syntax: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Resolve the configured syntax name, `None` for a custom button
    pub fn kind(&self, default_level: u8) -> Result<Option<SyntaxKind>, SyntaxError> {
        self.syntax
            .as_deref()
            .map(|name| SyntaxKind::from_name(name, self.level.or(Some(default_level))))
            .transpose()
    }
}

fn default_header_level() -> u8 {
    DEFAULT_HEADER_LEVEL
}

fn default_buttons() -> Vec<ButtonConfig> {
    [
        "header",
        "bold",
        "italic",
        "quote",
        "code",
        "link",
        "image",
        "unordered-list",
        "ordered-list",
        "task-list",
        "mention",
        "ref",
    ]
    .into_iter()
    .map(ButtonConfig::syntax)
    .collect()
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            flavor: Flavor::default(),
            header_level: default_header_level(),
            buttons: default_buttons(),
        }
    }
}

impl ToolbarConfig {
    /// Load config from the user config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults when the file is
    /// missing or broken
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
