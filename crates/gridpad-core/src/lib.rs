pub mod cell;
pub mod config;
pub mod decoration;
pub mod error;
pub mod format;
pub mod pagination;
pub mod render;
pub mod store;
pub mod validation;

pub use cell::CellId;
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use format::{Color, HorizontalAlign};
pub use pagination::{PageRange, Pagination};
pub use render::{GridRenderer, RenderedCell, RenderedPage};
pub use store::CellStore;
pub use validation::{is_numeric_input, validate_edit};
