//! Settings Persistence
//!
//! Handles loading and saving application settings from/to a configuration
//! file, creating the file with defaults the first time.

use crate::config::Config;
use crate::error::SettingsResult;
use std::path::{Path, PathBuf};

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    config: Config,
    path: PathBuf,
}

impl SettingsPersistence {
    /// Create a persistence layer with default config bound to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Config::default(),
            path: path.into(),
        }
    }

    /// Load settings from `path`
    pub fn load_from_file(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let config = Config::load_from_file(&path)?;
        Ok(Self { config, path })
    }

    /// Load settings from `path`, writing defaults there if it does not exist
    pub fn load_or_create(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        if path.exists() {
            return Self::load_from_file(path);
        }

        let persistence = Self::new(path);
        persistence.save()?;
        tracing::info!(path = %persistence.path.display(), "Created default settings");
        Ok(persistence)
    }

    /// Load settings from the platform default location
    pub fn load_default() -> SettingsResult<Self> {
        Self::load_or_create(Config::default_path()?)
    }

    /// Save settings to the bound path
    pub fn save(&self) -> SettingsResult<()> {
        self.config.save_to_file(&self.path)?;
        tracing::debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// File the settings are bound to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        self.config.validate()
    }
}
