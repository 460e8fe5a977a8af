use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Default number of cells in the grid
pub const DEFAULT_TOTAL_CELLS: u32 = 100_000;
/// Default number of cells rendered per page
pub const DEFAULT_PAGE_SIZE: u32 = 1008;
/// Largest page the renderer will materialize at once
pub const MAX_PAGE_SIZE: u32 = 10_000;
/// Default width of the rendered page grid
pub const DEFAULT_COLUMNS: u32 = 12;

/// Grid session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct GridConfig {
    /// Total number of addressable cells
    pub total_cells: u32,
    /// Cells per page
    pub page_size: u32,
    /// Columns of the page grid, used to position cells when rendering
    pub columns: u32,
    /// Maximum undo depth (None = unbounded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            total_cells: DEFAULT_TOTAL_CELLS,
            page_size: DEFAULT_PAGE_SIZE,
            columns: DEFAULT_COLUMNS,
            history_limit: None,
        }
    }
}

impl GridConfig {
    pub fn new(total_cells: u32, page_size: u32) -> Self {
        Self {
            total_cells,
            page_size,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(GridError::InvalidConfig("pageSize must be positive".to_string()));
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(GridError::InvalidConfig(format!(
                "pageSize must be at most {}",
                MAX_PAGE_SIZE
            )));
        }
        if self.columns == 0 {
            return Err(GridError::InvalidConfig("columns must be positive".to_string()));
        }
        if self.history_limit == Some(0) {
            return Err(GridError::InvalidConfig(
                "historyLimit must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}
