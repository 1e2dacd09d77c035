//! Undo/Redo history for canvas snapshots
//!
//! Two unbounded stacks of whole-record snapshots. The caller supplies the
//! live record on every undo/redo and installs the snapshot that comes back.
//!
//! Recording a checkpoint does not clear the redo stack, so a redo after a
//! fresh edit still returns the state that was undone earlier.

use bmcanvas_core::CanvasRecord;

/// Manages undo/redo stacks of canvas snapshots
#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    undo_stack: Vec<CanvasRecord>,
    redo_stack: Vec<CanvasRecord>,
}

impl HistoryManager {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot taken before a state-overwriting action
    pub fn record_checkpoint(&mut self, snapshot: CanvasRecord) {
        self.undo_stack.push(snapshot);
        tracing::debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "Checkpoint recorded"
        );
    }

    /// Step back. `current` is the live record, moved onto the redo stack.
    pub fn undo(&mut self, current: CanvasRecord) -> Option<CanvasRecord> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward. `current` is the live record, moved onto the undo stack.
    pub fn redo(&mut self, current: CanvasRecord) -> Option<CanvasRecord> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get number of undo operations available
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get number of redo operations available
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
