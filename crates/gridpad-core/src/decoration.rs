//! Page decorations: font size, alignment, search highlight and filter.
//!
//! These only touch the rendered page. The store is never read or written,
//! so off-page cells are unaffected and every page change starts clean.

use crate::error::{GridError, Result};
use crate::format::HorizontalAlign;
use crate::render::RenderedPage;

/// Case-insensitive substring match used by search and filter
pub fn matches_query(value: &str, query: &str) -> bool {
    contains_lowered(value, &query.to_lowercase())
}

/// `lowered_query` must already be lowercase
fn contains_lowered(value: &str, lowered_query: &str) -> bool {
    lowered_query.is_empty() || value.to_lowercase().contains(lowered_query)
}

/// Set the font size (in pixels) of every rendered cell
pub fn set_font_size(page: &mut RenderedPage, px: u32) -> Result<()> {
    if px == 0 {
        return Err(GridError::InvalidFontSize(px));
    }
    page.set_font_size(px);
    Ok(())
}

/// Align the text of every rendered cell
pub fn set_alignment(page: &mut RenderedPage, align: HorizontalAlign) {
    page.set_alignment(align);
}

/// Highlight rendered cells containing `query`, clearing the rest.
/// Returns the number of highlighted cells.
pub fn highlight_matches(page: &mut RenderedPage, query: &str) -> usize {
    let query = query.to_lowercase();
    let hits: Vec<bool> = page
        .values()
        .iter()
        .map(|value| contains_lowered(value, &query))
        .collect();

    for (i, hit) in hits.iter().enumerate() {
        page.set_highlighted(i, *hit);
    }
    hits.iter().filter(|hit| **hit).count()
}

/// Hide rendered cells not containing `query`. An empty query shows everything.
/// Returns the number of cells left visible.
pub fn apply_filter(page: &mut RenderedPage, query: &str) -> usize {
    let query = query.to_lowercase();
    let hidden: Vec<bool> = page
        .values()
        .iter()
        .map(|value| !contains_lowered(value, &query))
        .collect();

    for (i, hide) in hidden.iter().enumerate() {
        page.set_hidden(i, *hide);
    }
    hidden.iter().filter(|hide| !**hide).count()
}

/// Show every rendered cell again
pub fn clear_filter(page: &mut RenderedPage) {
    page.show_all();
}
