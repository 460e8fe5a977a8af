use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cell::CellId;

/// Sparse storage for cell values - only cells that have been written are stored.
///
/// A missing entry reads as the empty string. Writing an empty string still
/// materializes the entry, so `contains` tells apart "never written" from
/// "cleared".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellStore {
    cells: HashMap<CellId, String>,
}

impl CellStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stored value, or "" for a cell that was never written
    pub fn get(&self, id: CellId) -> &str {
        self.cells.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Store a value, returning the previous one if the cell was materialized
    pub fn set(&mut self, id: CellId, value: impl Into<String>) -> Option<String> {
        self.cells.insert(id, value.into())
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.cells.contains_key(&id)
    }

    /// Number of materialized cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over materialized cells (unordered)
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &str)> {
        self.cells.iter().map(|(id, value)| (*id, value.as_str()))
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_is_empty() {
        let store = CellStore::new();
        assert_eq!(store.get(CellId::new(7)), "");
        assert!(!store.contains(CellId::new(7)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let mut store = CellStore::new();
        for (id, value) in [(0, "1"), (3, "hello"), (99_999, "last")] {
            store.set(CellId::new(id), value);
            assert_eq!(store.get(CellId::new(id)), value);
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_set_returns_previous() {
        let mut store = CellStore::new();
        assert_eq!(store.set(CellId::new(1), "a"), None);
        assert_eq!(store.set(CellId::new(1), "b"), Some("a".to_string()));
        assert_eq!(store.get(CellId::new(1)), "b");
    }

    #[test]
    fn test_empty_string_is_materialized() {
        let mut store = CellStore::new();
        store.set(CellId::new(4), "");
        assert!(store.contains(CellId::new(4)));
        assert_eq!(store.get(CellId::new(4)), "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_iter_and_clear() {
        let mut store = CellStore::new();
        store.set(CellId::new(2), "x");
        store.set(CellId::new(5), "10");

        let mut entries: Vec<_> = store.iter().collect();
        entries.sort();
        assert_eq!(entries, vec![(CellId::new(2), "x"), (CellId::new(5), "10")]);

        store.clear();
        assert!(store.is_empty());
    }
}
