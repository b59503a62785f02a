//! Where spanlight keeps its files
//!
//! ```text
//! ~/.config/spanlight/          (%APPDATA%\spanlight on Windows)
//! ├── config.yaml               HighlighterConfig
//! ├── themes/{id}.yaml          user themes, shadowing builtins
//! └── logs/spanlight.log.*      daily rolling debug log
//! ```

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "spanlight";

/// Prefix of the rolling log files in [`logs_dir`]
pub const LOG_FILE_PREFIX: &str = "spanlight.log";

/// Root of all spanlight files.
///
/// `$XDG_CONFIG_HOME/spanlight` when set, else `~/.config/spanlight`;
/// `%APPDATA%\spanlight` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")));

    base.map(|dir| dir.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

/// Path a user theme with this id would be loaded from
pub fn user_theme_file(id: &str) -> Option<PathBuf> {
    themes_dir().map(|dir| dir.join(format!("{}.yaml", id)))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: Option<PathBuf>) -> Result<PathBuf, String> {
    let path = path.ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))?;
    Ok(path)
}

/// Create the config directory if needed and return it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    ensure_dir(config_dir())
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    ensure_dir(logs_dir())
}
