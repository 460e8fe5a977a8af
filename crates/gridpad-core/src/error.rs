use thiserror::Error;

use crate::cell::CellId;

/// Errors surfaced to the user of a grid session
#[derive(Error, Debug)]
pub enum GridError {
    /// Non-numeric input in a numeric-only cell
    #[error("Only numeric values are allowed in this cell!")]
    NumericOnly { id: CellId },

    #[error("Cell {id} is outside the grid (0..{total})")]
    CellOutOfRange { id: CellId, total: u32 },

    #[error("Invalid font size: {0}px")]
    InvalidFontSize(u32),

    #[error("Invalid alignment: {0}")]
    InvalidAlignment(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GridError {
    /// Stable machine-readable code for the browser bridge
    pub fn code(&self) -> &'static str {
        match self {
            GridError::NumericOnly { .. } => "NUMERIC_ONLY",
            GridError::CellOutOfRange { .. } => "CELL_OUT_OF_RANGE",
            GridError::InvalidFontSize(_) => "INVALID_FONT_SIZE",
            GridError::InvalidAlignment(_) => "INVALID_ALIGNMENT",
            GridError::InvalidConfig(_) => "INVALID_CONFIG",
            GridError::Json(_) => "JSON_ERROR",
        }
    }

    /// Whether this error came from the cell validation rule
    pub fn is_validation(&self) -> bool {
        matches!(self, GridError::NumericOnly { .. })
    }
}

pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_only_message() {
        let err = GridError::NumericOnly { id: CellId::new(10) };
        assert_eq!(err.to_string(), "Only numeric values are allowed in this cell!");
        assert_eq!(err.code(), "NUMERIC_ONLY");
        assert!(err.is_validation());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = GridError::CellOutOfRange {
            id: CellId::new(100),
            total: 100,
        };
        assert_eq!(err.to_string(), "Cell 100 is outside the grid (0..100)");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: GridError = parse.unwrap_err().into();
        assert_eq!(err.code(), "JSON_ERROR");
    }
}
