//! # BMCanvas
//!
//! A Business Model Canvas editor engine:
//! - Nine fixed canvas sections with titles and guiding prompts
//! - Content-length validation with per-section status
//! - Undo/redo checkpoints and timestamped version snapshots
//! - Periodic autosave on a cancellable background task
//! - JSON canvas files and A3 landscape page export
//!
//! ## Architecture
//!
//! BMCanvas is organized as a workspace with multiple crates:
//!
//! 1. **bmcanvas-core** - Sections, canvas record, canvas file format
//! 2. **bmcanvas-export** - Page layout, word wrapping, PDF and SVG rendering
//! 3. **bmcanvas-settings** - Application configuration and persistence
//! 4. **bmcanvas-editor** - Editing session, validator, history, versions, autosave
//! 5. **bmcanvas** - Command-line driver that integrates all crates

pub mod cli;

pub use bmcanvas_core::{
    load_from_file, parse_document, save_to_file, to_document, CanvasError, CanvasRecord,
    ParseSectionError, Section,
};

pub use bmcanvas_editor::{
    AutosaveConfig, AutosaveHandle, EditorError, EditorResult, EditorSession, HistoryManager,
    SectionStatus, ValidationReport, ValidationResult, ValidationRule, Validator, Version,
    VersionStore,
};

pub use bmcanvas_export::{
    export_to_file, layout, wrap_text, DocumentFormat, DocumentRenderer, ExportError, LayoutCell,
    PageGeometry, PdfRenderer, Rect, SvgRenderer, TextMetrics,
};

pub use bmcanvas_settings::{Config, SettingsError, SettingsPersistence, Theme};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // Logs go to stderr so command output on stdout stays clean
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
