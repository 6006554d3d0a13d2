//! Weighted complexity scoring for store content.

use crate::core::StoreMetrics;

/// Weight per collection. Collections render as image tiles and carry
/// the most navigational weight.
pub const COLLECTION_WEIGHT: f64 = 2.0;

/// Weight per static content page.
pub const PAGE_WEIGHT: f64 = 1.5;

/// Weight per menu entry, nested entries included.
pub const MENU_ITEM_WEIGHT: f64 = 1.0;

/// Flat bonus when any top-level menu entry has children. Expandable
/// navigation is required regardless of how many items it hides.
pub const NESTED_MENU_BONUS: f64 = 5.0;

/// Compute the complexity score for a set of content metrics.
///
/// The score is a linear combination of the content counts plus a flat
/// nested-menu bonus. Weights are part of the classification contract:
/// changing them shifts tier boundaries for every storefront.
pub fn complexity_score(metrics: &StoreMetrics) -> f64 {
    let mut score = metrics.collection_count as f64 * COLLECTION_WEIGHT
        + metrics.page_count as f64 * PAGE_WEIGHT
        + metrics.menu_item_count as f64 * MENU_ITEM_WEIGHT;

    if metrics.has_nested_menus {
        score += NESTED_MENU_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_scores_zero() {
        let metrics = StoreMetrics::new(0, 0, 0, false);
        assert_eq!(complexity_score(&metrics), 0.0);
    }

    #[test]
    fn score_is_weighted_sum_of_counts() {
        // 10 * 2.0 + 4 * 1.5 + 6 * 1.0 = 32.0
        let metrics = StoreMetrics::new(10, 4, 6, false);
        assert_eq!(complexity_score(&metrics), 32.0);
    }

    #[test]
    fn nested_menus_add_flat_bonus() {
        let flat = StoreMetrics::new(10, 4, 6, false);
        let nested = StoreMetrics::new(10, 4, 6, true);
        assert_eq!(
            complexity_score(&nested),
            complexity_score(&flat) + NESTED_MENU_BONUS
        );
    }

    #[test]
    fn bonus_is_flat_regardless_of_tree_size() {
        let one_child = StoreMetrics::new(0, 0, 2, true);
        let many_children = StoreMetrics::new(0, 0, 40, true);
        assert_eq!(complexity_score(&one_child), 7.0);
        assert_eq!(complexity_score(&many_children), 45.0);
    }
}
