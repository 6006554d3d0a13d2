//! Tier thresholds and the per-tier rendering policy table.

use crate::core::{HeaderLayout, MenuStrategy, MobileLayout, StoreSize};

/// Scores below this stay `Minimal`.
pub const SMALL_THRESHOLD: f64 = 15.0;

/// Scores below this stay at most `Small`.
pub const MEDIUM_THRESHOLD: f64 = 35.0;

/// Scores at or above this are `Large`.
pub const LARGE_THRESHOLD: f64 = 70.0;

/// One rendering policy per tier, indexed by `StoreSize` discriminant.
///
/// The table is the contract: classification never synthesizes field
/// values, it only picks a row.
pub const STRATEGY_TABLE: [MenuStrategy; 4] = [
    MenuStrategy {
        size: StoreSize::Minimal,
        header_layout: HeaderLayout::Flat,
        mobile_layout: MobileLayout::Simple,
        show_search: false,
        show_images: false,
        group_collections: false,
        max_visible_items: 4,
        collection_grid_columns: 1,
        page_grid_columns: 1,
    },
    MenuStrategy {
        size: StoreSize::Small,
        header_layout: HeaderLayout::Dropdown,
        mobile_layout: MobileLayout::Simple,
        show_search: false,
        show_images: true,
        group_collections: false,
        max_visible_items: 6,
        collection_grid_columns: 1,
        page_grid_columns: 1,
    },
    MenuStrategy {
        size: StoreSize::Medium,
        header_layout: HeaderLayout::Dropdown,
        mobile_layout: MobileLayout::Grouped,
        show_search: true,
        show_images: true,
        group_collections: true,
        max_visible_items: 8,
        collection_grid_columns: 2,
        page_grid_columns: 2,
    },
    MenuStrategy {
        size: StoreSize::Large,
        header_layout: HeaderLayout::Mega,
        mobile_layout: MobileLayout::Advanced,
        show_search: true,
        show_images: true,
        group_collections: true,
        max_visible_items: 12,
        collection_grid_columns: 3,
        page_grid_columns: 2,
    },
];

/// Map a complexity score onto a tier.
///
/// Boundaries are half-open: a score sitting exactly on a threshold
/// lands in the higher tier.
pub fn classify_store_size(score: f64) -> StoreSize {
    if score < SMALL_THRESHOLD {
        StoreSize::Minimal
    } else if score < MEDIUM_THRESHOLD {
        StoreSize::Small
    } else if score < LARGE_THRESHOLD {
        StoreSize::Medium
    } else {
        StoreSize::Large
    }
}

/// Look up the fixed rendering policy for a tier.
pub fn strategy_for(size: StoreSize) -> MenuStrategy {
    STRATEGY_TABLE[size as usize]
}
