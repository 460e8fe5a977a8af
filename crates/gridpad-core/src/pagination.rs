use serde::{Deserialize, Serialize};

use crate::cell::CellId;

/// Half-open range of cell ids shown on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn contains(&self, id: CellId) -> bool {
        id.index() >= self.start && id.index() < self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn ids(&self) -> impl Iterator<Item = CellId> {
        (self.start..self.end).map(CellId::new)
    }
}

/// Fixed-size, 1-indexed pagination over the cell id space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    total_cells: u32,
    page_size: u32,
    page: u32,
}

impl Pagination {
    /// Create pagination positioned on page 1. A zero page size is treated as 1.
    pub fn new(total_cells: u32, page_size: u32) -> Self {
        Self {
            total_cells,
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of pages (an empty grid still has one, empty, page)
    pub fn page_count(&self) -> u32 {
        self.total_cells.div_ceil(self.page_size).max(1)
    }

    /// Ids visible on `page`, clamped to the grid
    pub fn visible_range(&self, page: u32) -> PageRange {
        let total = self.total_cells as u64;
        let size = self.page_size as u64;
        let start = (page.saturating_sub(1) as u64 * size).min(total);
        let end = (start + size).min(total);
        PageRange::new(start as u32, end as u32)
    }

    /// Ids visible on the current page
    pub fn current_range(&self) -> PageRange {
        self.visible_range(self.page)
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        (self.page as u64) * (self.page_size as u64) < self.total_cells as u64
    }

    /// Move to the previous page. Returns false on page 1.
    pub fn prev_page(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Move to the next page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Jump to a page, clamped into [1, page_count]. Returns whether the page changed.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let target = page.clamp(1, self.page_count());
        let changed = target != self.page;
        self.page = target;
        changed
    }

    /// Label shown next to the navigation buttons
    pub fn label(&self) -> String {
        format!("Page {}", self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let pages = Pagination::new(100_000, 1008);
        assert_eq!(pages.page(), 1);
        assert_eq!(pages.current_range(), PageRange::new(0, 1008));
        assert!(!pages.can_go_prev());
        assert!(pages.can_go_next());
    }

    #[test]
    fn test_large_grid_scenario() {
        let mut pages = Pagination::new(100_000, 1008);
        assert_eq!(pages.page_count(), 100);

        assert!(pages.go_to_page(99));
        assert_eq!(pages.current_range(), PageRange::new(98_784, 99_792));
        assert!(pages.can_go_next());

        assert!(pages.next_page());
        assert_eq!(pages.page(), 100);
        assert_eq!(pages.current_range(), PageRange::new(99_792, 100_000));
        assert_eq!(pages.current_range().len(), 208);
        assert!(!pages.can_go_next());
        assert!(pages.can_go_prev());
    }

    #[test]
    fn test_navigation_at_bounds_is_noop() {
        let mut pages = Pagination::new(30, 10);
        assert!(!pages.prev_page());
        assert_eq!(pages.page(), 1);

        assert!(pages.next_page());
        assert!(pages.next_page());
        assert!(!pages.next_page());
        assert_eq!(pages.page(), 3);
        assert_eq!(pages.current_range(), PageRange::new(20, 30));
    }

    #[test]
    fn test_exact_multiple_last_page() {
        let mut pages = Pagination::new(20, 10);
        pages.next_page();
        assert!(!pages.can_go_next());
        assert_eq!(pages.page_count(), 2);
    }

    #[test]
    fn test_never_exposes_ids_outside_grid() {
        let pages = Pagination::new(95, 10);
        for page in 0..=15 {
            let range = pages.visible_range(page);
            assert!(range.end <= 95);
            assert!(range.start <= range.end);
        }
        assert!(pages.visible_range(20).is_empty());
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut pages = Pagination::new(95, 10);
        assert!(pages.go_to_page(500));
        assert_eq!(pages.page(), 10);
        assert!(pages.go_to_page(0));
        assert_eq!(pages.page(), 1);
        assert!(!pages.go_to_page(1));
    }

    #[test]
    fn test_empty_grid() {
        let pages = Pagination::new(0, 10);
        assert_eq!(pages.page_count(), 1);
        assert!(pages.current_range().is_empty());
        assert!(!pages.can_go_next());
        assert!(!pages.can_go_prev());
    }

    #[test]
    fn test_range_contains() {
        let pages = Pagination::new(100_000, 1008);

        let range = pages.visible_range(2);
        assert!(range.contains(CellId::new(1008)));
        assert!(!range.contains(CellId::new(2016)));
    }

    #[test]
    fn test_label() {
        let mut pages = Pagination::new(100, 10);
        pages.next_page();
        assert_eq!(pages.label(), "Page 2");
    }

    #[test]
    fn test_serialization() {
        let mut pages = Pagination::new(100, 10);
        pages.go_to_page(4);

        let serialized = serde_json::to_string(&pages).unwrap();
        let deserialized: Pagination = serde_json::from_str(&serialized).unwrap();

        assert_eq!(pages, deserialized);
    }
}
