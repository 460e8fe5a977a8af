use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical cell identifier (0-indexed, independent of pagination)
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub u32);

impl CellId {
    pub const fn new(id: u32) -> Self {
        CellId(id)
    }

    pub const fn index(self) -> u32 {
        self.0
    }

    /// Check if this id is within a grid of `total` cells
    pub fn is_valid(self, total: u32) -> bool {
        self.0 < total
    }

    /// Cells whose id is a multiple of 5 only accept numeric input
    pub fn is_numeric_only(self) -> bool {
        self.0 % 5 == 0
    }
}

impl From<u32> for CellId {
    fn from(id: u32) -> Self {
        CellId(id)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
