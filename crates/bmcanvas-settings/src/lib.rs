//! BMCanvas Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{AutosaveSettings, Config, ExportSettings, Theme, UiSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
