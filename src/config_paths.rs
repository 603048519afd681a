//! Centralized configuration paths for markbar
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/markbar/`
//! - Windows: `%APPDATA%\markbar\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "markbar";

/// Base config directory for markbar
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/markbar`
///   - Else: `~/.config/markbar`
///
/// Windows:
///   - `%APPDATA%\markbar`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/markbar/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/markbar/keymap.yaml`
pub fn keymap_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("keymap.yaml"))
}

/// `~/.config/markbar/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_config_dir() {
        if let Some(dir) = config_dir() {
            assert!(dir.ends_with(APP_DIR));
            assert_eq!(config_file(), Some(dir.join("config.yaml")));
            assert_eq!(keymap_file(), Some(dir.join("keymap.yaml")));
            assert_eq!(logs_dir(), Some(dir.join("logs")));
        }
    }
}
