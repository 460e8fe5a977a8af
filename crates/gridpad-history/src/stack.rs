use crate::record::HistoryRecord;
use gridpad_core::{CellId, CellStore};

/// Manages undo/redo history for cell edits
#[derive(Default)]
pub struct HistoryManager {
    /// Records that can be undone, most recent last
    undo_stack: Vec<HistoryRecord>,
    /// Records that can be redone, most recent last
    redo_stack: Vec<HistoryRecord>,
    /// Maximum number of undo levels (None = unbounded)
    max_size: Option<usize>,
}

impl HistoryManager {
    /// Create a history manager with unbounded undo depth
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history manager keeping at most `max_size` undo levels
    pub fn with_limit(max_size: usize) -> Self {
        Self {
            max_size: Some(max_size),
            ..Self::default()
        }
    }

    /// Record the current value of `id` ahead of a direct edit.
    ///
    /// Must be called before the store is mutated. Clears the redo stack.
    pub fn record_before_edit(&mut self, store: &CellStore, id: CellId) {
        self.undo_stack.push(HistoryRecord::capture(store, id));

        // Clear redo stack on new action
        self.redo_stack.clear();

        if let Some(max_size) = self.max_size {
            if self.undo_stack.len() > max_size {
                let excess = self.undo_stack.len() - max_size;
                self.undo_stack.drain(..excess);
            }
        }
    }

    /// Record history for `id` and write `value` into the store
    pub fn commit_edit(&mut self, store: &mut CellStore, id: CellId, value: impl Into<String>) {
        self.record_before_edit(store, id);
        store.set(id, value);
    }

    /// Undo the last edit, returning the cell that changed
    pub fn undo(&mut self, store: &mut CellStore) -> Option<CellId> {
        let record = self.undo_stack.pop()?;
        let id = record.id;
        self.redo_stack.push(record.apply(store));
        tracing::debug!(cell = id.index(), "undo");
        Some(id)
    }

    /// Redo the last undone edit, returning the cell that changed
    pub fn redo(&mut self, store: &mut CellStore) -> Option<CellId> {
        let record = self.redo_stack.pop()?;
        let id = record.id;
        self.undo_stack.push(record.apply(store));
        tracing::debug!(cell = id.index(), "redo");
        Some(id)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl std::fmt::Debug for HistoryManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryManager")
            .field("undo_count", &self.undo_stack.len())
            .field("redo_count", &self.redo_stack.len())
            .field("max_size", &self.max_size)
            .finish()
    }
}
