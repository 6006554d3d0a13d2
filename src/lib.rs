//! Adaptive navigation analysis for e-commerce storefronts.
//!
//! Given how much content a store has, pick how its navigation should
//! render: a weighted complexity score maps the store onto a size tier,
//! and each tier carries a fixed [`MenuStrategy`]. Alongside
//! classification, a keyword detector surfaces merchandising
//! collections ("Summer Sale", "New Arrivals") so navigation can badge
//! them.
//!
//! ```
//! use navmap::{analyze_menu_structure, StoreSize};
//!
//! let strategy = analyze_menu_structure(24, 8, 15, true);
//! assert_eq!(strategy.size, StoreSize::Large);
//! assert!(strategy.show_search);
//! ```

// Export modules for library usage
pub mod analysis;
pub mod config;
pub mod core;
pub mod detection;
pub mod menu;
pub mod report;

// Re-export commonly used types
pub use crate::analysis::{
    analyze_menu_structure, classify_store_size, complexity_score, menu_strategy, strategy_for,
};
pub use crate::config::{load_config, ConfigError, StoreConfig};
pub use crate::core::metrics::{count_menu_items, estimated_page_count, has_nested_items};
pub use crate::core::{
    Collection, HeaderLayout, MenuItem, MenuStrategy, MobileLayout, Page, StoreMetrics, StoreSize,
};
pub use crate::detection::{
    detect_collection_type, detect_special_collections, has_special_collections,
    special_collection_of_type, SpecialCollection, SpecialCollectionType,
};
pub use crate::menu::{basic_fallback_menu, fallback_menu, normalize_storefront_url};
pub use crate::report::NavigationReport;
