use gridpad_core::{CellId, CellStore};
use serde::{Deserialize, Serialize};

/// A cell and the value it held before an edit.
///
/// Applying a record swaps the stored value with the recorded one, which
/// yields the record needed to reverse the swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: CellId,
    pub value: String,
}

impl HistoryRecord {
    pub fn new(id: CellId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    /// Capture the current stored value of `id`
    pub fn capture(store: &CellStore, id: CellId) -> Self {
        Self::new(id, store.get(id))
    }

    /// Write the recorded value back, returning the record of what it replaced
    pub fn apply(self, store: &mut CellStore) -> HistoryRecord {
        let inverse = HistoryRecord::capture(store, self.id);
        store.set(self.id, self.value);
        inverse
    }
}
