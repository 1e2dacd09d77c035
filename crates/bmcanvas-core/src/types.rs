//! Type aliases for shared editor state.
//!
//! The live canvas record and the version log are read by the autosave task
//! while the editing session writes them, so they are shared behind
//! `parking_lot` locks.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bmcanvas_core::types::*;
//!
//! // Instead of: Arc<RwLock<CanvasRecord>>
//! let live: ThreadSafeRw<CanvasRecord> = thread_safe_rw(CanvasRecord::new());
//! let copy = live.read().clone();
//! ```

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex`, which never poisons.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A thread-safe optional wrapper for lazily-set cross-thread state.
pub type ThreadSafeOption<T> = Arc<Mutex<Option<T>>>;

/// A thread-safe reader-writer lock wrapper.
///
/// Readers take a consistent view of the whole value; writers are exclusive.
pub type ThreadSafeRw<T> = Arc<RwLock<T>>;

/// Create a new `ThreadSafe<T>` from a value.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}

/// Create a new `ThreadSafeRw<T>` from a value.
#[inline]
pub fn thread_safe_rw<T>(value: T) -> ThreadSafeRw<T> {
    Arc::new(RwLock::new(value))
}
