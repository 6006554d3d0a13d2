use crate::core::{Collection, MenuItem, Page, StoreMetrics};

/// Total number of entries in a menu tree, nested entries included.
pub fn count_menu_items(items: &[MenuItem]) -> usize {
    items
        .iter()
        .map(|item| 1 + count_menu_items(&item.items))
        .sum()
}

/// True when any top-level entry carries children.
pub fn has_nested_items(items: &[MenuItem]) -> bool {
    items.iter().any(MenuItem::has_children)
}

/// Page count guess for stores that expose collections but no page list:
/// five standard pages plus one per collection, capped at 15.
pub fn estimated_page_count(collection_count: usize) -> usize {
    (collection_count + 5).min(15)
}

impl StoreMetrics {
    /// Measure explicit collection, page, and menu content.
    pub fn from_content(collections: &[Collection], pages: &[Page], menu: &[MenuItem]) -> Self {
        StoreMetrics::new(
            collections.len(),
            pages.len(),
            count_menu_items(menu),
            has_nested_items(menu),
        )
    }

    /// Measure content when no page list is available.
    pub fn with_estimated_pages(collections: &[Collection], menu: &[MenuItem]) -> Self {
        StoreMetrics::new(
            collections.len(),
            estimated_page_count(collections.len()),
            count_menu_items(menu),
            has_nested_items(menu),
        )
    }
}
