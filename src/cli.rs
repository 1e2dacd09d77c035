//! Command-line driver
//!
//! Headless front end over [`EditorSession`]: create, edit, inspect,
//! validate and export canvas files.

use anyhow::Context;
use bmcanvas_core::{CanvasRecord, Section};
use bmcanvas_editor::EditorSession;
use bmcanvas_export::{DocumentFormat, TextMetrics};
use bmcanvas_settings::{Config, SettingsPersistence};
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Business Model Canvas editor
#[derive(Parser, Debug)]
#[command(name = "bmcanvas")]
#[command(about = "Business Model Canvas editor")]
#[command(version)]
pub struct Cli {
    /// Settings file (.json or .toml); built-in defaults when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an empty canvas
    New { file: PathBuf },
    /// Print the validation report and progress
    Validate { file: PathBuf },
    /// Set one section and save
    Set {
        file: PathBuf,
        /// Section title, key or kebab-case name, e.g. "value-proposition"
        section: Section,
        text: String,
    },
    /// Print every section title and text
    Show { file: PathBuf },
    /// Lay out the canvas on a page and write it as PDF or SVG
    Export {
        file: PathBuf,
        /// Output path; the canvas file with the format's extension when omitted
        output: Option<PathBuf>,
        /// Document format, "pdf" or "svg"; the configured format when omitted
        #[arg(long)]
        format: Option<DocumentFormat>,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        margin: Option<f64>,
    },
}

/// Run a parsed command, writing its report to stdout
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let output = execute(cli)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Run a parsed command and return what it would print
pub fn execute(cli: Cli) -> anyhow::Result<String> {
    let mut settings = load_settings(cli.config.as_deref())?;
    let config = settings
        .as_ref()
        .map(|s| s.config().clone())
        .unwrap_or_default();

    let (output, touched) = match cli.command {
        Commands::New { file } => {
            let mut session = EditorSession::from_config(&config);
            session
                .save_as(&file)
                .with_context(|| format!("Failed to create {}", file.display()))?;
            (format!("Created {}", file.display()), Some(file))
        }
        Commands::Validate { file } => {
            let session = open(&config, &file)?;
            (render_validation(&session), None)
        }
        Commands::Set {
            file,
            section,
            text,
        } => {
            let mut session = open(&config, &file)?;
            let status = session.set_section(section, text);
            session
                .save()
                .with_context(|| format!("Failed to save {}", file.display()))?;
            let state = match (status.filled, status.valid) {
                (false, _) => "empty",
                (true, true) => "ok",
                (true, false) => "needs more detail",
            };
            (format!("{}: {}", section.title(), state), Some(file))
        }
        Commands::Show { file } => {
            let session = open(&config, &file)?;
            (render_record(&session.record(), config.ui.show_prompts), None)
        }
        Commands::Export {
            file,
            output,
            format,
            width,
            height,
            margin,
        } => {
            let mut session = open(&config, &file)?;
            let mut page = session.page();
            page.width = width.unwrap_or(page.width);
            page.height = height.unwrap_or(page.height);
            page.margin = margin.unwrap_or(page.margin);
            session.set_page(page);
            let renderer = format
                .unwrap_or(config.export.format)
                .renderer(TextMetrics::default());
            let output = output.unwrap_or_else(|| file.with_extension(renderer.extension()));
            session
                .export(renderer.as_ref(), &output)
                .with_context(|| format!("Failed to export to {}", output.display()))?;
            (format!("Exported {}", output.display()), None)
        }
    };

    if let (Some(settings), Some(file)) = (settings.as_mut(), touched) {
        settings.config_mut().add_recent_file(file);
        settings.save().context("Failed to update settings")?;
    }

    Ok(output)
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<Option<SettingsPersistence>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let settings = SettingsPersistence::load_or_create(path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    settings.validate()?;
    Ok(Some(settings))
}

fn open(config: &Config, file: &Path) -> anyhow::Result<EditorSession> {
    let mut session = EditorSession::from_config(config);
    session
        .load(file)
        .with_context(|| format!("Failed to open {}", file.display()))?;
    Ok(session)
}

/// Validation report followed by a progress line
pub fn render_validation(session: &EditorSession) -> String {
    let record = session.record();
    format!(
        "{}\nProgress: {}/{} sections ({:.0}%)",
        session.validation_report(),
        record.filled_count(),
        Section::COUNT,
        record.progress() * 100.0
    )
}

/// Every section title followed by its text.
///
/// Empty sections show their guiding prompt when `show_prompts` is set and
/// nothing otherwise.
pub fn render_record(record: &CanvasRecord, show_prompts: bool) -> String {
    let mut out = String::new();
    for (section, text) in record.iter() {
        let _ = writeln!(out, "## {}", section.title());
        if record.is_filled(section) {
            let _ = writeln!(out, "{}", text);
        } else if show_prompts {
            let _ = writeln!(out, "({})", section.prompt());
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}
