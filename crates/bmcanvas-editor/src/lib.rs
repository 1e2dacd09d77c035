//! # BMCanvas Editor
//!
//! The editing session around a canvas record.
//!
//! ## Architecture
//!
//! ```text
//! EditorSession
//!   ├── live CanvasRecord (shared with the autosave task)
//!   ├── HistoryManager    undo/redo checkpoints
//!   ├── VersionStore      timestamped snapshots
//!   ├── Validator         content-length rules
//!   └── autosave          cancellable tokio task
//! ```

pub mod autosave;
pub mod error;
pub mod history;
pub mod session;
pub mod validator;
pub mod versions;

pub use autosave::{
    autosave_tick, spawn_autosave, AutosaveConfig, AutosaveGuard, AutosaveHandle,
    AutosaveShared, DEFAULT_AUTOSAVE_INTERVAL,
};
pub use error::{EditorError, EditorResult};
pub use history::HistoryManager;
pub use session::{EditorSession, SectionStatus};
pub use validator::{RulePredicate, ValidationReport, ValidationResult, ValidationRule, Validator};
pub use versions::{Comment, Version, VersionStore};
