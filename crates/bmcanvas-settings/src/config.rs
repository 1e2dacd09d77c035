//! Configuration and settings management for BMCanvas
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - UI preferences (theme, section prompts)
//! - Autosave (enabled flag, interval)
//! - Export page geometry and document format
//! - Recent files

use crate::error::{ConfigError, SettingsError, SettingsResult};
use bmcanvas_export::{DocumentFormat, PageGeometry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application directory name under the platform config directory
const APP_DIR: &str = "bmcanvas";
/// Config file name inside [`APP_DIR`]
const CONFIG_FILE: &str = "config.json";

/// Theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark professional theme
    #[default]
    Professional,
    /// Light theme
    Light,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Professional => Self::Light,
            Self::Light => Self::Professional,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Professional => write!(f, "Professional (Dark)"),
            Self::Light => write!(f, "Light"),
        }
    }
}

/// UI preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Selected theme
    #[serde(default)]
    pub theme: Theme,
    /// Show the guiding prompt in place of an empty section
    #[serde(default = "default_true")]
    pub show_prompts: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            show_prompts: true,
        }
    }
}

/// Autosave settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutosaveSettings {
    /// Whether periodic version snapshots are taken
    pub enabled: bool,
    /// Minimum seconds between automatic snapshots
    pub interval_secs: u64,
}

impl AutosaveSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for AutosaveSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 300,
        }
    }
}

/// Export page settings, in millimetres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub page_width: f64,
    pub page_height: f64,
    pub margin: f64,
    /// Document format written by export
    #[serde(default)]
    pub format: DocumentFormat,
}

impl ExportSettings {
    pub fn page(&self) -> PageGeometry {
        PageGeometry::new(self.page_width, self.page_height, self.margin)
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        let page = PageGeometry::a3_landscape();
        Self {
            page_width: page.width,
            page_height: page.height,
            margin: page.margin,
            format: DocumentFormat::default(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Recent files list, most recent first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
    /// Number of recent files to track
    #[serde(default = "default_recent_files_count")]
    pub recent_files_count: usize,
    /// UI preferences
    #[serde(default)]
    pub ui: UiSettings,
    /// Autosave settings
    #[serde(default)]
    pub autosave: AutosaveSettings,
    /// Export settings
    #[serde(default)]
    pub export: ExportSettings,
}

fn default_recent_files_count() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_files: Vec::new(),
            recent_files_count: default_recent_files_count(),
            ui: UiSettings::default(),
            autosave: AutosaveSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location, e.g. `~/.config/bmcanvas/config.json`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.autosave.interval_secs == 0 {
            return Err(SettingsError::invalid(
                "autosave.interval_secs",
                "Autosave interval must be > 0",
            ));
        }

        if self.recent_files_count == 0 {
            return Err(SettingsError::invalid(
                "recent_files_count",
                "Recent files count must be > 0",
            ));
        }

        self.export
            .page()
            .validate()
            .map_err(|e| SettingsError::invalid("export", e.to_string()))?;

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        // Add to front
        self.recent_files.insert(0, path);

        // Trim to max size
        self.recent_files.truncate(self.recent_files_count);
    }
}

/// Supported config file formats
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}
