//! Session state and the single dispatch point for page controls.

use gridpad_core::decoration;
use gridpad_core::{
    validate_edit, CellId, CellStore, GridConfig, GridError, GridRenderer, HorizontalAlign,
    Pagination, RenderedPage,
};
use gridpad_history::HistoryManager;
use serde::{Deserialize, Serialize};

/// A user action coming from one of the page controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GridAction {
    Edit { id: CellId, value: String },
    PrevPage,
    NextPage,
    GoToPage { page: u32 },
    SetFontSize { px: u32 },
    SetAlignment { align: HorizontalAlign },
    Search { query: String },
    Filter { query: String },
    ClearFilter,
    Undo,
    Redo,
}

/// What an action did, so the page knows what to redraw
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ActionOutcome {
    CellUpdated {
        id: CellId,
        value: String,
    },
    EditRejected {
        id: CellId,
        code: &'static str,
        message: String,
        /// Whether the rejection came from the numeric-only rule
        validation: bool,
    },
    PageChanged {
        page: u32,
        label: String,
    },
    Restyled,
    Highlighted {
        matches: usize,
    },
    Filtered {
        shown: usize,
    },
    CellRestored {
        id: CellId,
        value: String,
        /// Whether the cell is on the current page
        visible: bool,
    },
    Invalid {
        code: &'static str,
        message: String,
    },
    Unchanged,
}

impl ActionOutcome {
    fn invalid(err: GridError) -> Self {
        ActionOutcome::Invalid {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Everything a grid page needs: cell store, history, pagination and the
/// currently rendered page.
#[derive(Debug)]
pub struct GridSession {
    config: GridConfig,
    store: CellStore,
    history: HistoryManager,
    pages: Pagination,
    renderer: GridRenderer,
    page: RenderedPage,
}

impl Default for GridSession {
    fn default() -> Self {
        Self::from_valid_config(GridConfig::default())
    }
}

impl GridSession {
    /// Create a session showing page 1
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GridConfig) -> Self {
        let store = CellStore::new();
        let history = match config.history_limit {
            Some(limit) => HistoryManager::with_limit(limit),
            None => HistoryManager::new(),
        };
        let pages = Pagination::new(config.total_cells, config.page_size);
        let renderer = GridRenderer::new(config.columns);
        let page = renderer.render(&store, pages.current_range());

        Self {
            config,
            store,
            history,
            pages,
            renderer,
            page,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn store(&self) -> &CellStore {
        &self.store
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pages
    }

    pub fn page(&self) -> &RenderedPage {
        &self.page
    }

    /// Handle a user action and update state accordingly
    pub fn handle_action(&mut self, action: GridAction) -> ActionOutcome {
        match action {
            GridAction::Edit { id, value } => match self.edit(id, &value) {
                Ok(()) => ActionOutcome::CellUpdated { id, value },
                Err(err) => ActionOutcome::EditRejected {
                    id,
                    code: err.code(),
                    validation: err.is_validation(),
                    message: err.to_string(),
                },
            },
            GridAction::PrevPage => {
                let moved = self.pages.prev_page();
                self.page_outcome(moved)
            }
            GridAction::NextPage => {
                let moved = self.pages.next_page();
                self.page_outcome(moved)
            }
            GridAction::GoToPage { page } => {
                let moved = self.pages.go_to_page(page);
                self.page_outcome(moved)
            }
            GridAction::SetFontSize { px } => {
                match decoration::set_font_size(&mut self.page, px) {
                    Ok(()) => ActionOutcome::Restyled,
                    Err(err) => ActionOutcome::invalid(err),
                }
            }
            GridAction::SetAlignment { align } => {
                decoration::set_alignment(&mut self.page, align);
                ActionOutcome::Restyled
            }
            GridAction::Search { query } => ActionOutcome::Highlighted {
                matches: decoration::highlight_matches(&mut self.page, &query),
            },
            GridAction::Filter { query } => ActionOutcome::Filtered {
                shown: decoration::apply_filter(&mut self.page, &query),
            },
            GridAction::ClearFilter => {
                decoration::clear_filter(&mut self.page);
                ActionOutcome::Filtered {
                    shown: self.page.len(),
                }
            }
            GridAction::Undo => {
                let changed = self.history.undo(&mut self.store);
                self.restore_outcome(changed)
            }
            GridAction::Redo => {
                let changed = self.history.redo(&mut self.store);
                self.restore_outcome(changed)
            }
        }
    }

    /// Apply a direct edit from a cell input.
    ///
    /// Rejected edits leave the store and history untouched; if the cell is
    /// rendered its displayed value is reset to empty.
    pub fn edit(&mut self, id: CellId, value: &str) -> Result<(), GridError> {
        if !id.is_valid(self.config.total_cells) {
            return Err(GridError::CellOutOfRange {
                id,
                total: self.config.total_cells,
            });
        }

        if let Err(err) = validate_edit(id, value) {
            tracing::warn!(cell = id.index(), value, "rejected non-numeric input");
            self.page.set_value(id, "");
            return Err(err);
        }

        self.history.commit_edit(&mut self.store, id, value);
        self.page.set_value(id, value);
        tracing::debug!(cell = id.index(), "cell edited");
        Ok(())
    }

    /// Current stored value of a cell
    pub fn cell_value(&self, id: CellId) -> &str {
        self.store.get(id)
    }

    fn rerender(&mut self) {
        self.page = self.renderer.render(&self.store, self.pages.current_range());
    }

    fn page_outcome(&mut self, moved: bool) -> ActionOutcome {
        if !moved {
            return ActionOutcome::Unchanged;
        }
        self.rerender();
        tracing::debug!(page = self.pages.page(), "page changed");
        ActionOutcome::PageChanged {
            page: self.pages.page(),
            label: self.pages.label(),
        }
    }

    fn restore_outcome(&mut self, changed: Option<CellId>) -> ActionOutcome {
        let Some(id) = changed else {
            return ActionOutcome::Unchanged;
        };
        let value = self.store.get(id).to_string();
        let visible = self.page.set_value(id, value.clone());
        ActionOutcome::CellRestored { id, value, visible }
    }
}
