//! # BMCanvas Core
//!
//! Core types for the Business Model Canvas editor.
//! Provides the fixed nine-section canvas record, section metadata,
//! the persisted canvas file format, and shared-state type aliases.
//!
//! ## Architecture
//!
//! ```text
//! Section (nine fixed sections, titles, prompts, keys)
//!   └── CanvasRecord (one text field per section)
//!         └── CanvasFile (JSON document on disk)
//! ```

pub mod error;
pub mod file;
pub mod record;
pub mod section;
pub mod types;

pub use error::{CanvasError, Result};
pub use file::{load_from_file, parse_document, save_to_file, to_document};
pub use record::CanvasRecord;
pub use section::{ParseSectionError, Section};
pub use types::{thread_safe, thread_safe_rw, ThreadSafe, ThreadSafeOption, ThreadSafeRw};
