use gridpad_core::{CellId, GridConfig, GridError, HorizontalAlign, RenderedCell};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::session::{ActionOutcome, GridAction, GridSession};

/// Grid engine exposed to JavaScript
#[wasm_bindgen]
pub struct GridEngine {
    session: GridSession,
}

/// Structured error object for JavaScript
#[derive(Serialize)]
pub struct JsGridError {
    code: String,
    message: String,
}

impl From<GridError> for JsGridError {
    fn from(err: GridError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

fn to_js_error(err: GridError) -> JsValue {
    let js_error = JsGridError::from(err);
    serde_wasm_bindgen::to_value(&js_error).unwrap_or(JsValue::NULL)
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("{}", message);
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl GridEngine {
    /// Create an engine with the default grid (100000 cells, 1008 per page)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: GridSession::default(),
        }
    }

    /// Create an engine from a JSON configuration object
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<GridEngine, JsValue> {
        let config = GridConfig::from_json(config_json).map_err(to_js_error)?;
        let session = GridSession::new(config).map_err(to_js_error)?;
        Ok(Self { session })
    }

    /// Dispatch a JSON-encoded action, returning the JSON-encoded outcome
    pub fn dispatch(&mut self, action_json: &str) -> Result<String, JsValue> {
        let action: GridAction = serde_json::from_str(action_json)
            .map_err(|e| to_js_error(GridError::from(e)))?;
        Ok(to_json(&self.session.handle_action(action)))
    }

    /// Set a cell value from a cell input.
    /// Returns a JSON result; on rejection the page should alert the message
    /// and clear the input.
    #[wasm_bindgen(js_name = setCellValue)]
    pub fn set_cell_value(&mut self, id: u32, value: &str) -> String {
        let outcome = self.session.handle_action(GridAction::Edit {
            id: CellId::new(id),
            value: value.to_string(),
        });

        match outcome {
            ActionOutcome::EditRejected {
                id,
                code,
                message,
                validation,
            } => {
                log(&format!("Rejected edit for cell {}: {}", id, message));
                let error = if validation {
                    "validation_failed"
                } else {
                    "invalid_cell"
                };
                serde_json::json!({
                    "error": error,
                    "code": code,
                    "message": message,
                })
                .to_string()
            }
            _ => serde_json::json!({
                "ok": true,
                "id": id,
                "value": value,
            })
            .to_string(),
        }
    }

    #[wasm_bindgen(js_name = getCellValue)]
    pub fn get_cell_value(&self, id: u32) -> String {
        self.session.cell_value(CellId::new(id)).to_string()
    }

    /// Rendered cells of the current page as a JSON array
    #[wasm_bindgen(js_name = renderPage)]
    pub fn render_page(&self) -> String {
        let cells: Vec<RenderedCell> = self.session.page().cells().collect();
        to_json(&cells)
    }

    /// A single rendered cell as JSON, or null when it is not on the page
    #[wasm_bindgen(js_name = getRenderedCell)]
    pub fn get_rendered_cell(&self, id: u32) -> JsValue {
        match self.session.page().cell(CellId::new(id)) {
            Some(cell) => serde_wasm_bindgen::to_value(&cell).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// Ids of the rendered cells not hidden by the filter
    #[wasm_bindgen(js_name = visibleIds)]
    pub fn visible_ids(&self) -> js_sys::Uint32Array {
        let ids: Vec<u32> = self
            .session
            .page()
            .shown_ids()
            .into_iter()
            .map(CellId::index)
            .collect();
        js_sys::Uint32Array::from(ids.as_slice())
    }

    #[wasm_bindgen(js_name = prevPage)]
    pub fn prev_page(&mut self) -> bool {
        self.page_changed(GridAction::PrevPage)
    }

    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&mut self) -> bool {
        self.page_changed(GridAction::NextPage)
    }

    #[wasm_bindgen(js_name = goToPage)]
    pub fn go_to_page(&mut self, page: u32) -> bool {
        self.page_changed(GridAction::GoToPage { page })
    }

    #[wasm_bindgen(js_name = currentPage)]
    pub fn current_page(&self) -> u32 {
        self.session.pagination().page()
    }

    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self) -> u32 {
        self.session.pagination().page_count()
    }

    #[wasm_bindgen(js_name = pageLabel)]
    pub fn page_label(&self) -> String {
        self.session.pagination().label()
    }

    #[wasm_bindgen(js_name = canGoPrev)]
    pub fn can_go_prev(&self) -> bool {
        self.session.pagination().can_go_prev()
    }

    #[wasm_bindgen(js_name = canGoNext)]
    pub fn can_go_next(&self) -> bool {
        self.session.pagination().can_go_next()
    }

    #[wasm_bindgen(js_name = setFontSize)]
    pub fn set_font_size(&mut self, px: u32) -> Result<(), JsValue> {
        match self.session.handle_action(GridAction::SetFontSize { px }) {
            ActionOutcome::Invalid { .. } => Err(to_js_error(GridError::InvalidFontSize(px))),
            _ => Ok(()),
        }
    }

    /// Align all rendered cells ("left", "center" or "right")
    #[wasm_bindgen(js_name = setAlignment)]
    pub fn set_alignment(&mut self, align: &str) -> Result<(), JsValue> {
        let align: HorizontalAlign = align.parse().map_err(to_js_error)?;
        self.session.handle_action(GridAction::SetAlignment { align });
        Ok(())
    }

    /// Highlight matching cells, returning the number of matches
    pub fn search(&mut self, query: &str) -> usize {
        match self.session.handle_action(GridAction::Search {
            query: query.to_string(),
        }) {
            ActionOutcome::Highlighted { matches } => matches,
            _ => 0,
        }
    }

    /// Hide non-matching cells, returning the number still shown
    pub fn filter(&mut self, query: &str) -> usize {
        let outcome = self.session.handle_action(GridAction::Filter {
            query: query.to_string(),
        });
        Self::shown_count(outcome)
    }

    #[wasm_bindgen(js_name = clearFilter)]
    pub fn clear_filter(&mut self) -> usize {
        let outcome = self.session.handle_action(GridAction::ClearFilter);
        Self::shown_count(outcome)
    }

    /// Undo the last edit. Returns the restored cell as JSON, or "null".
    pub fn undo(&mut self) -> String {
        let outcome = self.session.handle_action(GridAction::Undo);
        Self::restored_json(outcome)
    }

    /// Redo the last undone edit. Returns the restored cell as JSON, or "null".
    pub fn redo(&mut self) -> String {
        let outcome = self.session.handle_action(GridAction::Redo);
        Self::restored_json(outcome)
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.session.history().can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.session.history().can_redo()
    }

    /// Configuration in use, as JSON
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> String {
        to_json(self.session.config())
    }
}

impl GridEngine {
    fn page_changed(&mut self, action: GridAction) -> bool {
        match self.session.handle_action(action) {
            ActionOutcome::PageChanged { label, .. } => {
                log(&label);
                true
            }
            _ => false,
        }
    }

    fn shown_count(outcome: ActionOutcome) -> usize {
        match outcome {
            ActionOutcome::Filtered { shown } => shown,
            _ => 0,
        }
    }

    fn restored_json(outcome: ActionOutcome) -> String {
        match outcome {
            outcome @ ActionOutcome::CellRestored { .. } => to_json(&outcome),
            _ => "null".to_string(),
        }
    }
}
