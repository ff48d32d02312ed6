//! Configuration types for oas-explorer.
//!
//! Runtime configuration is assembled from CLI arguments into the
//! typed structs below; there is no ambient global configuration. TUI
//! preferences (theme choice) persist across sessions under the user
//! config directory.

use crate::reports::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output destination and rendering options shared by subcommands.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Output format selection
    pub format: OutputFormat,
    /// Output file path (stdout when absent)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Configuration for the `view` command.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Path to the report JSON document
    pub report_path: PathBuf,
    /// Output options
    pub output: OutputConfig,
    /// Exit non-zero when the latest revision has breaking changes
    pub fail_on_breaking: bool,
}

/// Persisted TUI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiPreferences {
    /// Theme name: "dark" or "light"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("oas-explorer").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Load preferences from an explicit path (used in tests).
    #[must_use]
    pub fn load_from(path: &std::path::Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save preferences to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("preferences.json");

        let prefs = TuiPreferences {
            theme: "light".into(),
        };
        prefs.save_to(&path).unwrap();

        let loaded = TuiPreferences::load_from(&path);
        assert_eq!(loaded.theme, "light");
    }

    #[test]
    fn test_missing_preferences_default() {
        let loaded = TuiPreferences::load_from(std::path::Path::new("/nonexistent/prefs.json"));
        assert_eq!(loaded.theme, "dark");
    }
}
