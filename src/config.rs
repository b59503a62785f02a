//! Highlighter configuration persistence
//!
//! Stores user preferences in `~/.config/spanlight/config.yaml`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How annotated lines are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<span class='...'>` markup
    Html,
    /// 24-bit terminal colors from the active theme
    #[default]
    Ansi,
    /// Raw spans as JSON, one object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "ansi" => Ok(OutputFormat::Ansi),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Html => "html",
            OutputFormat::Ansi => "ansi",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Highlighter configuration that persists across runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlighterConfig {
    /// Selected theme id (e.g., "default-dark", "github-light")
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default)]
    pub format: OutputFormat,

    /// Start with highlighting turned on
    #[serde(default = "default_show_formatted")]
    pub show_formatted: bool,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_show_formatted() -> bool {
    true
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            format: OutputFormat::default(),
            show_formatted: default_show_formatted(),
        }
    }
}

impl HighlighterConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
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

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::ensure_config_dir()?.join("config.yaml");

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("html".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert_eq!("ANSI".parse::<OutputFormat>(), Ok(OutputFormat::Ansi));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [OutputFormat::Html, OutputFormat::Ansi, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: HighlighterConfig = serde_yaml::from_str("format: html\n").unwrap();
        assert_eq!(config.theme, "default-dark");
        assert_eq!(config.format, OutputFormat::Html);
        assert!(config.show_formatted);
    }
}
