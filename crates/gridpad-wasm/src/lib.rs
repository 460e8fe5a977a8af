mod api;
pub mod session;

pub use api::GridEngine;
pub use session::{ActionOutcome, GridAction, GridSession};

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
