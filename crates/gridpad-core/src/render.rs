//! Projection of the cell store onto the current page.
//!
//! A `RenderedPage` is rebuilt from scratch on every page change, so any
//! decoration applied to it (font size, alignment, highlight, filter) lasts
//! only until the next render.

use bitvec::prelude::*;
use serde::Serialize;

use crate::cell::CellId;
use crate::format::{Color, HorizontalAlign};
use crate::pagination::PageRange;
use crate::store::CellStore;

/// One rendered cell, as handed to the page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCell {
    pub id: CellId,
    pub value: String,
    /// Row within the page grid
    pub row: u32,
    /// Column within the page grid
    pub col: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<HorizontalAlign>,
    pub background_color: String,
    pub highlighted: bool,
    pub hidden: bool,
}

/// Cells of the current page plus their decorations
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    range: PageRange,
    columns: u32,
    values: Vec<String>,
    font_size: Option<u32>,
    align: Option<HorizontalAlign>,
    highlighted: BitVec,
    hidden: BitVec,
}

impl RenderedPage {
    pub fn range(&self) -> PageRange {
        self.range
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.range.contains(id)
    }

    fn slot(&self, id: CellId) -> Option<usize> {
        self.contains(id).then(|| (id.index() - self.range.start) as usize)
    }

    /// Displayed value of a rendered cell
    pub fn value(&self, id: CellId) -> Option<&str> {
        self.slot(id).map(|i| self.values[i].as_str())
    }

    /// Update the displayed value of a cell. Returns false if it is not on this page.
    pub fn set_value(&mut self, id: CellId, value: impl Into<String>) -> bool {
        match self.slot(id) {
            Some(i) => {
                self.values[i] = value.into();
                true
            }
            None => false,
        }
    }

    pub fn is_hidden(&self, id: CellId) -> bool {
        self.slot(id).is_some_and(|i| self.hidden[i])
    }

    pub fn is_highlighted(&self, id: CellId) -> bool {
        self.slot(id).is_some_and(|i| self.highlighted[i])
    }

    pub fn font_size(&self) -> Option<u32> {
        self.font_size
    }

    pub fn alignment(&self) -> Option<HorizontalAlign> {
        self.align
    }

    /// Ids of rendered cells not hidden by a filter
    pub fn shown_ids(&self) -> Vec<CellId> {
        self.hidden
            .iter_zeros()
            .map(|i| CellId::new(self.range.start + i as u32))
            .collect()
    }

    pub fn cell(&self, id: CellId) -> Option<RenderedCell> {
        self.slot(id).map(|i| self.build_cell(i))
    }

    pub fn cells(&self) -> impl Iterator<Item = RenderedCell> + '_ {
        (0..self.values.len()).map(move |i| self.build_cell(i))
    }

    fn build_cell(&self, i: usize) -> RenderedCell {
        let offset = i as u32;
        let highlighted = self.highlighted[i];
        let background = if highlighted {
            Color::HIGHLIGHT
        } else {
            Color::WHITE
        };
        RenderedCell {
            id: CellId::new(self.range.start + offset),
            value: self.values[i].clone(),
            row: offset / self.columns,
            col: offset % self.columns,
            font_size: self.font_size,
            text_align: self.align,
            background_color: background.to_hex(),
            highlighted,
            hidden: self.hidden[i],
        }
    }

    pub(crate) fn values(&self) -> &[String] {
        &self.values
    }

    pub(crate) fn set_font_size(&mut self, px: u32) {
        self.font_size = Some(px);
    }

    pub(crate) fn set_alignment(&mut self, align: HorizontalAlign) {
        self.align = Some(align);
    }

    pub(crate) fn set_highlighted(&mut self, i: usize, on: bool) {
        self.highlighted.set(i, on);
    }

    pub(crate) fn set_hidden(&mut self, i: usize, on: bool) {
        self.hidden.set(i, on);
    }

    pub(crate) fn show_all(&mut self) {
        self.hidden.fill(false);
    }
}

/// Builds rendered pages from the store
#[derive(Debug, Clone, Copy)]
pub struct GridRenderer {
    columns: u32,
}

impl GridRenderer {
    /// `columns` is the width of the page grid; zero is treated as 1
    pub fn new(columns: u32) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    /// Render every id in `range` with its stored value (empty if never written)
    pub fn render(&self, store: &CellStore, range: PageRange) -> RenderedPage {
        let values: Vec<String> = range.ids().map(|id| store.get(id).to_string()).collect();
        let len = values.len();

        tracing::debug!(start = range.start, end = range.end, "rendered page");

        RenderedPage {
            range,
            columns: self.columns,
            values,
            font_size: None,
            align: None,
            highlighted: bitvec![0; len],
            hidden: bitvec![0; len],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(entries: &[(u32, &str)]) -> CellStore {
        let mut store = CellStore::new();
        for (id, value) in entries {
            store.set(CellId::new(*id), *value);
        }
        store
    }

    #[test]
    fn test_render_restores_values() {
        let store = store_with(&[(1, "a"), (12, "off page")]);
        let page = GridRenderer::new(4).render(&store, PageRange::new(0, 10));

        assert_eq!(page.len(), 10);
        assert_eq!(page.value(CellId::new(1)), Some("a"));
        assert_eq!(page.value(CellId::new(2)), Some(""));
        assert_eq!(page.value(CellId::new(12)), None);
    }

    #[test]
    fn test_render_positions() {
        let store = CellStore::new();
        let page = GridRenderer::new(4).render(&store, PageRange::new(8, 16));

        let cell = page.cell(CellId::new(13)).unwrap();
        assert_eq!((cell.row, cell.col), (1, 1));
        let first = page.cells().next().unwrap();
        assert_eq!(first.id, CellId::new(8));
        assert_eq!((first.row, first.col), (0, 0));
    }

    #[test]
    fn test_fresh_page_is_undecorated() {
        let store = store_with(&[(0, "x")]);
        let page = GridRenderer::new(3).render(&store, PageRange::new(0, 3));

        for cell in page.cells() {
            assert!(!cell.hidden);
            assert!(!cell.highlighted);
            assert_eq!(cell.font_size, None);
            assert_eq!(cell.text_align, None);
            assert_eq!(cell.background_color, "#ffffff");
        }
        assert_eq!(page.shown_ids().len(), 3);
    }

    #[test]
    fn test_set_value_only_on_page() {
        let store = CellStore::new();
        let mut page = GridRenderer::new(3).render(&store, PageRange::new(10, 20));

        assert!(page.set_value(CellId::new(15), "new"));
        assert_eq!(page.value(CellId::new(15)), Some("new"));
        assert!(!page.set_value(CellId::new(25), "elsewhere"));
    }

    #[test]
    fn test_cell_serializes_camel_case() {
        let store = store_with(&[(0, "7")]);
        let page = GridRenderer::new(2).render(&store, PageRange::new(0, 1));

        let json = serde_json::to_value(page.cell(CellId::new(0)).unwrap()).unwrap();
        assert_eq!(json["id"], 0);
        assert_eq!(json["value"], "7");
        assert_eq!(json["backgroundColor"], "#ffffff");
        assert!(json.get("fontSize").is_none());
    }
}
