use gridpad_core::decoration::{apply_filter, clear_filter, highlight_matches};
use gridpad_core::{CellId, CellStore, GridRenderer, Pagination};

fn main() {
    // Fill a few cells on the first two pages
    let mut store = CellStore::new();
    store.set(CellId::new(1), "Apple");
    store.set(CellId::new(2), "Banana");
    store.set(CellId::new(3), "apple pie");
    store.set(CellId::new(5), "42");
    store.set(CellId::new(12), "Pineapple (page 2)");

    let mut pages = Pagination::new(100, 10);
    let renderer = GridRenderer::new(5);
    let mut page = renderer.render(&store, pages.current_range());

    println!("=== {} ===", pages.label());
    let hits = highlight_matches(&mut page, "APPLE");
    println!("Search 'APPLE' highlighted {} cells:", hits);
    for cell in page.cells().filter(|c| c.highlighted) {
        println!(
            "  - cell {} (row {}, col {}) -> '{}'",
            cell.id, cell.row, cell.col, cell.value
        );
    }

    let shown = apply_filter(&mut page, "an");
    println!("\nFilter 'an' leaves {} cells shown: {:?}", shown, page.shown_ids());
    clear_filter(&mut page);
    println!("Cleared filter, {} cells shown", page.shown_ids().len());

    // Off-page cells are untouched until their page is rendered
    pages.next_page();
    let mut page = renderer.render(&store, pages.current_range());
    println!("\n=== {} ===", pages.label());
    let hits = highlight_matches(&mut page, "apple");
    println!("Search 'apple' highlighted {} cells", hits);
}
