//! Editing session
//!
//! `EditorSession` is the one context object the UI talks to. It owns the
//! live record, the undo/redo history, the version log, the validator and
//! the user preferences for this window.
//!
//! Typing into a section does not record a checkpoint. Save, load, restore
//! and new-canvas each push the pre-action state onto the undo stack.

use crate::autosave::{spawn_autosave, AutosaveConfig, AutosaveHandle, AutosaveShared};
use crate::error::{EditorError, EditorResult};
use crate::history::HistoryManager;
use crate::validator::{ValidationReport, ValidationResult, Validator};
use crate::versions::{Version, VersionStore};
use bmcanvas_core::{
    thread_safe, thread_safe_rw, CanvasRecord, Section, ThreadSafe, ThreadSafeOption,
    ThreadSafeRw,
};
use bmcanvas_export::{export_to_file, layout, DocumentRenderer, LayoutCell, PageGeometry};
use bmcanvas_settings::{Config, Theme};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Display state of one section after an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStatus {
    pub section: Section,
    pub filled: bool,
    pub valid: bool,
}

/// Complete state of one canvas editing window
pub struct EditorSession {
    live: ThreadSafeRw<CanvasRecord>,
    history: HistoryManager,
    versions: ThreadSafe<VersionStore>,
    last_saved: ThreadSafeOption<Instant>,
    autosave_enabled: Arc<AtomicBool>,
    autosave_interval: Duration,
    validator: Validator,
    theme: Theme,
    page: PageGeometry,
    current_file: Option<PathBuf>,
    modified: bool,
}

impl EditorSession {
    /// Session with default preferences
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Session configured from application settings
    pub fn from_config(config: &Config) -> Self {
        Self {
            live: thread_safe_rw(CanvasRecord::new()),
            history: HistoryManager::new(),
            versions: thread_safe(VersionStore::new()),
            last_saved: thread_safe(None),
            autosave_enabled: Arc::new(AtomicBool::new(config.autosave.enabled)),
            autosave_interval: config.autosave.interval(),
            validator: Validator::new(),
            theme: config.ui.theme,
            page: config.export.page(),
            current_file: None,
            modified: false,
        }
    }

    /// Replace the validator
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    // ---------------------------------------------------------------------
    // Live record
    // ---------------------------------------------------------------------

    /// Copy of the live record
    pub fn record(&self) -> CanvasRecord {
        self.live.read().clone()
    }

    /// Text of one section
    pub fn section_text(&self, section: Section) -> String {
        self.live.read().get(section).to_string()
    }

    /// Apply a user edit to a section and return its refreshed status
    pub fn set_section(&mut self, section: Section, text: impl Into<String>) -> SectionStatus {
        self.live.write().set(section, text);
        self.modified = true;
        self.section_status(section)
    }

    /// Filled/valid state of a section
    pub fn section_status(&self, section: Section) -> SectionStatus {
        let record = self.live.read();
        SectionStatus {
            section,
            filled: record.is_filled(section),
            valid: self.validator.is_section_valid(&record, section),
        }
    }

    /// Status of every section in canonical order
    pub fn section_statuses(&self) -> Vec<SectionStatus> {
        Section::ALL
            .into_iter()
            .map(|s| self.section_status(s))
            .collect()
    }

    /// Fraction of filled sections
    pub fn progress(&self) -> f64 {
        self.live.read().progress()
    }

    /// Copy a section's text for the clipboard
    pub fn copy_section(&self, section: Section) -> String {
        self.section_text(section)
    }

    /// Clear a section and return its text for the clipboard
    pub fn cut_section(&mut self, section: Section) -> String {
        let text = self.live.write().take(section);
        self.modified = true;
        text
    }

    /// Replace a section with clipboard text
    pub fn paste_section(&mut self, section: Section, text: impl Into<String>) -> SectionStatus {
        self.set_section(section, text)
    }

    fn checkpoint(&mut self) {
        let snapshot = self.record();
        self.history.record_checkpoint(snapshot);
    }

    fn install(&mut self, record: CanvasRecord) {
        *self.live.write() = record;
    }

    // ---------------------------------------------------------------------
    // Validation
    // ---------------------------------------------------------------------

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn validate(&self) -> Vec<ValidationResult> {
        self.validator.validate(&self.live.read())
    }

    pub fn validation_report(&self) -> ValidationReport {
        self.validator.report(&self.live.read())
    }

    // ---------------------------------------------------------------------
    // Undo / redo
    // ---------------------------------------------------------------------

    /// Restore the previous checkpoint; false when there is none
    pub fn undo(&mut self) -> bool {
        let current = self.record();
        match self.history.undo(current) {
            Some(previous) => {
                self.install(previous);
                self.modified = true;
                tracing::debug!("Undo applied");
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone state; false when there is none
    pub fn redo(&mut self) -> bool {
        let current = self.record();
        match self.history.redo(current) {
            Some(next) => {
                self.install(next);
                self.modified = true;
                tracing::debug!("Redo applied");
                true
            }
            None => false,
        }
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ---------------------------------------------------------------------
    // Files
    // ---------------------------------------------------------------------

    /// Start a blank canvas
    pub fn new_canvas(&mut self) {
        self.checkpoint();
        self.install(CanvasRecord::new());
        self.current_file = None;
        self.modified = false;
    }

    /// Save the live record to `path` and remember it as the current file
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> EditorResult<()> {
        let path = path.as_ref();
        let record = self.record();
        bmcanvas_core::save_to_file(&record, path)?;
        self.history.record_checkpoint(record);
        self.current_file = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Save to the current file
    pub fn save(&mut self) -> EditorResult<()> {
        let path = self.current_file.clone().ok_or(EditorError::NoFilePath)?;
        self.save_as(path)
    }

    /// Replace the live record with the canvas in `path`.
    ///
    /// On failure the live record and history are left untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> EditorResult<()> {
        let path = path.as_ref();
        let loaded = bmcanvas_core::load_from_file(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Canvas load failed");
        })?;
        self.checkpoint();
        self.install(loaded);
        self.current_file = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Get display name for the canvas.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled");

        if self.modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }

    // ---------------------------------------------------------------------
    // Versions
    // ---------------------------------------------------------------------

    /// Record the live record as a new version
    pub fn snapshot_version(&self) -> Version {
        // same lock order as the autosave tick
        let mut last_saved = self.last_saved.lock();
        let record = self.record();
        let version = self.versions.lock().snapshot(record);
        *last_saved = Some(tokio::time::Instant::now().into_std());
        version
    }

    /// All versions, oldest first
    pub fn versions(&self) -> Vec<Version> {
        self.versions.lock().versions().to_vec()
    }

    /// Install a stored version as the live record
    pub fn restore_version(&mut self, id: &str) -> EditorResult<()> {
        let record = self
            .versions
            .lock()
            .get(id)
            .map(Version::restore)
            .ok_or_else(|| EditorError::VersionNotFound(id.to_string()))?;
        self.checkpoint();
        self.install(record);
        self.modified = true;
        tracing::info!(id, "Version restored");
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Autosave
    // ---------------------------------------------------------------------

    pub fn autosave_enabled(&self) -> bool {
        self.autosave_enabled.load(Ordering::Acquire)
    }

    /// Toggle autosave; a running autosave task picks this up on its next tick
    pub fn set_autosave_enabled(&self, enabled: bool) {
        self.autosave_enabled.store(enabled, Ordering::Release);
    }

    pub fn autosave_interval(&self) -> Duration {
        self.autosave_interval
    }

    /// State the autosave task shares with this session
    pub fn autosave_shared(&self) -> AutosaveShared {
        AutosaveShared {
            live: Arc::clone(&self.live),
            versions: Arc::clone(&self.versions),
            last_saved: Arc::clone(&self.last_saved),
            enabled: Arc::clone(&self.autosave_enabled),
        }
    }

    /// Spawn the autosave task at the configured interval
    pub fn start_autosave(&self) -> AutosaveHandle {
        self.start_autosave_with(AutosaveConfig::every(self.autosave_interval))
    }

    /// Spawn the autosave task with explicit timing
    pub fn start_autosave_with(&self, config: AutosaveConfig) -> AutosaveHandle {
        spawn_autosave(self.autosave_shared(), config)
    }

    // ---------------------------------------------------------------------
    // Preferences and export
    // ---------------------------------------------------------------------

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Switch between the professional and light themes
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn page(&self) -> PageGeometry {
        self.page
    }

    pub fn set_page(&mut self, page: PageGeometry) {
        self.page = page;
    }

    /// Layout of the live record on the session page
    pub fn layout(&self) -> EditorResult<Vec<LayoutCell>> {
        Ok(layout(&self.live.read(), &self.page)?)
    }

    /// Export the live record to `path`
    pub fn export(
        &self,
        renderer: &dyn DocumentRenderer,
        path: impl AsRef<Path>,
    ) -> EditorResult<()> {
        let record = self.record();
        export_to_file(&record, &self.page, renderer, path)?;
        Ok(())
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
