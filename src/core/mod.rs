pub mod metrics;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A curated grouping of products, addressable by a URL-safe handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Collection {
    pub fn new(id: impl Into<String>, title: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            handle: handle.into(),
            description: None,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A static content page (about, contact, policies).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub handle: String,
}

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            handle: handle.into(),
        }
    }
}

/// One entry in a navigation menu. Children nest arbitrarily deep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        items: Vec<MenuItem>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            items,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Content counts that drive strategy selection.
///
/// `menu_item_count` counts every entry in the menu tree, nested entries
/// included. `has_nested_menus` is true when any top-level entry has
/// children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreMetrics {
    pub collection_count: usize,
    pub page_count: usize,
    pub menu_item_count: usize,
    pub has_nested_menus: bool,
    /// Sum of the three counts. Informational; carries no scoring weight.
    pub total_navigable_items: usize,
}

impl StoreMetrics {
    pub fn new(
        collection_count: usize,
        page_count: usize,
        menu_item_count: usize,
        has_nested_menus: bool,
    ) -> Self {
        Self {
            collection_count,
            page_count,
            menu_item_count,
            has_nested_menus,
            total_navigable_items: collection_count + page_count + menu_item_count,
        }
    }
}

/// Complexity tier of a storefront. Ordering follows content volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreSize {
    Minimal,
    Small,
    Medium,
    Large,
}

impl StoreSize {
    pub const ALL: [StoreSize; 4] = [
        StoreSize::Minimal,
        StoreSize::Small,
        StoreSize::Medium,
        StoreSize::Large,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StoreSize::Minimal => "minimal",
            StoreSize::Small => "small",
            StoreSize::Medium => "medium",
            StoreSize::Large => "large",
        }
    }

    /// Merchant-facing explanation of why this tier's navigation looks
    /// the way it does.
    pub fn description(&self) -> &'static str {
        match self {
            StoreSize::Minimal => {
                "Your store has minimal content. Using a simple, flat navigation for optimal simplicity."
            }
            StoreSize::Small => {
                "Your store is small. Using a clean dropdown navigation with featured items."
            }
            StoreSize::Medium => {
                "Your store is growing. Using grouped navigation with search and organized sections."
            }
            StoreSize::Large => {
                "Your store is large. Using an advanced mega menu with multi-column layouts and search."
            }
        }
    }
}

impl fmt::Display for StoreSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Desktop header rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLayout {
    /// Inline links, no dropdowns.
    Flat,
    /// Hover dropdowns under top-level entries.
    Dropdown,
    /// Full-width multi-column panel.
    Mega,
}

/// Mobile drawer rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileLayout {
    Simple,
    Grouped,
    Advanced,
}

/// The complete rendering policy for a storefront's navigation.
///
/// Produced by classification; every field is fixed per tier so two
/// stores in the same tier always render the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuStrategy {
    pub size: StoreSize,
    pub header_layout: HeaderLayout,
    pub mobile_layout: MobileLayout,
    pub show_search: bool,
    /// Render collection entries as image tiles instead of text links.
    pub show_images: bool,
    /// Organize the mobile drawer into labeled sections.
    pub group_collections: bool,
    /// Cap on top-level entries shown before overflow.
    pub max_visible_items: usize,
    pub collection_grid_columns: usize,
    pub page_grid_columns: usize,
}
