//! Store complexity classification.
//!
//! Content counts are folded into a weighted score, the score picks a
//! tier, and the tier picks a fixed rendering policy. The pipeline is
//! deterministic: identical metrics always produce identical strategies.

pub mod scoring;
pub mod tiers;

pub use scoring::complexity_score;
pub use tiers::{classify_store_size, strategy_for};

use crate::core::{MenuStrategy, StoreMetrics};

/// Select the rendering strategy for a store's measured content.
pub fn menu_strategy(metrics: &StoreMetrics) -> MenuStrategy {
    strategy_for(classify_store_size(complexity_score(metrics)))
}

/// Strategy selection for callers holding raw counts instead of a
/// [`StoreMetrics`] value.
pub fn analyze_menu_structure(
    collection_count: usize,
    page_count: usize,
    menu_item_count: usize,
    has_nested_menus: bool,
) -> MenuStrategy {
    menu_strategy(&StoreMetrics::new(
        collection_count,
        page_count,
        menu_item_count,
        has_nested_menus,
    ))
}
