//! Keyword-based detection of merchandising collections.
//!
//! Collections named things like "Summer Sale" or "New Arrivals" get
//! surfaced separately in navigation with a badge and an icon. Matching
//! is a case-insensitive substring scan over title and handle, checked
//! against each category's keyword list in priority order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::Collection;

/// Merchandising categories a collection can be recognized as.
///
/// Declaration order is merchandising priority: when one collection
/// matches several categories, the first listed here wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialCollectionType {
    Sale,
    Deals,
    BestSellers,
    NewArrivals,
    Featured,
    Clearance,
}

impl SpecialCollectionType {
    /// Every category, in priority order.
    pub const ALL: [SpecialCollectionType; 6] = [
        SpecialCollectionType::Sale,
        SpecialCollectionType::Deals,
        SpecialCollectionType::BestSellers,
        SpecialCollectionType::NewArrivals,
        SpecialCollectionType::Featured,
        SpecialCollectionType::Clearance,
    ];

    /// Display rank, 1 is most prominent.
    pub fn priority(self) -> u8 {
        match self {
            SpecialCollectionType::Sale => 1,
            SpecialCollectionType::Deals => 2,
            SpecialCollectionType::BestSellers => 3,
            SpecialCollectionType::NewArrivals => 4,
            SpecialCollectionType::Featured => 5,
            SpecialCollectionType::Clearance => 6,
        }
    }

    /// Badge text shown next to the collection in navigation.
    pub fn label(self) -> &'static str {
        match self {
            SpecialCollectionType::Sale => "Sale",
            SpecialCollectionType::Deals => "Deals",
            SpecialCollectionType::BestSellers => "Best Sellers",
            SpecialCollectionType::NewArrivals => "New Arrivals",
            SpecialCollectionType::Featured => "Featured",
            SpecialCollectionType::Clearance => "Clearance",
        }
    }

    /// Icon name from the storefront's icon set.
    pub fn icon(self) -> &'static str {
        match self {
            SpecialCollectionType::Sale => "Tag",
            SpecialCollectionType::Deals => "Zap",
            SpecialCollectionType::BestSellers => "TrendingUp",
            SpecialCollectionType::NewArrivals => "Sparkles",
            SpecialCollectionType::Featured => "Star",
            SpecialCollectionType::Clearance => "Percent",
        }
    }

    /// Substrings that mark a collection as this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SpecialCollectionType::Sale => &["sale", "sales", "on sale", "discount", "discounted"],
            SpecialCollectionType::Deals => {
                &["deal", "deals", "offer", "offers", "special", "specials"]
            }
            SpecialCollectionType::BestSellers => &[
                "best seller",
                "best-seller",
                "bestseller",
                "best selling",
                "top seller",
                "popular",
            ],
            SpecialCollectionType::NewArrivals => &[
                "new arrival",
                "new-arrival",
                "new",
                "just in",
                "latest",
                "recently added",
            ],
            SpecialCollectionType::Featured => {
                &["featured", "spotlight", "highlight", "curated"]
            }
            SpecialCollectionType::Clearance => {
                &["clearance", "closeout", "final sale", "last chance"]
            }
        }
    }
}

/// A collection recognized as a merchandising category, with the
/// display attributes navigation needs to render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialCollection {
    #[serde(rename = "type")]
    pub kind: SpecialCollectionType,
    pub collection: Collection,
    pub priority: u8,
    pub label: &'static str,
    pub icon: &'static str,
}

impl SpecialCollection {
    fn new(kind: SpecialCollectionType, collection: Collection) -> Self {
        Self {
            kind,
            collection,
            priority: kind.priority(),
            label: kind.label(),
            icon: kind.icon(),
        }
    }
}

fn matches_collection_type(collection: &Collection, kind: SpecialCollectionType) -> bool {
    let title = collection.title.to_lowercase();
    let handle = collection.handle.to_lowercase();
    kind.keywords()
        .iter()
        .any(|keyword| title.contains(keyword) || handle.contains(keyword))
}

/// Classify a single collection, or `None` when no keyword matches.
///
/// Short keywords match as substrings: "Newfoundland Gear" classifies
/// as new arrivals because its title contains "new".
pub fn detect_collection_type(collection: &Collection) -> Option<SpecialCollectionType> {
    SpecialCollectionType::ALL
        .into_iter()
        .find(|kind| matches_collection_type(collection, *kind))
}

/// Find every merchandising collection in a store's catalog.
///
/// Each category appears at most once; when several collections match
/// the same category, the one earliest in the input claims it. Results
/// come back sorted by display priority.
pub fn detect_special_collections(collections: &[Collection]) -> Vec<SpecialCollection> {
    let mut claimed: HashSet<SpecialCollectionType> = HashSet::new();
    let mut special = Vec::new();

    for collection in collections {
        if let Some(kind) = detect_collection_type(collection) {
            if claimed.insert(kind) {
                special.push(SpecialCollection::new(kind, collection.clone()));
            }
        }
    }

    special.sort_by_key(|s| s.priority);
    special
}

/// First collection matching one specific category, ignoring the
/// priority scan entirely.
pub fn special_collection_of_type(
    collections: &[Collection],
    kind: SpecialCollectionType,
) -> Option<&Collection> {
    collections
        .iter()
        .find(|collection| matches_collection_type(collection, kind))
}

/// True when any collection in the catalog matches any category.
pub fn has_special_collections(collections: &[Collection]) -> bool {
    collections
        .iter()
        .any(|collection| detect_collection_type(collection).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(title: &str, handle: &str) -> Collection {
        Collection::new(format!("c-{handle}"), title, handle)
    }

    #[test]
    fn detects_each_category_from_title() {
        let cases = [
            ("Summer Sale", SpecialCollectionType::Sale),
            ("Hot Deals", SpecialCollectionType::Deals),
            ("Best Sellers 2024", SpecialCollectionType::BestSellers),
            ("Just In", SpecialCollectionType::NewArrivals),
            ("Featured Picks", SpecialCollectionType::Featured),
            ("Clearance Items", SpecialCollectionType::Clearance),
        ];
        for (title, expected) in cases {
            let c = collection(title, "plain-handle");
            assert_eq!(detect_collection_type(&c), Some(expected), "{title}");
        }
    }

    #[test]
    fn handle_matches_when_title_does_not() {
        let c = collection("Holiday Gift Guide", "holiday-deals");
        assert_eq!(detect_collection_type(&c), Some(SpecialCollectionType::Deals));
    }

    #[test]
    fn matching_ignores_case() {
        let c = collection("SUMMER SALE", "SUMMER-SALE");
        assert_eq!(detect_collection_type(&c), Some(SpecialCollectionType::Sale));
    }

    #[test]
    fn unrelated_collections_do_not_match() {
        let c = collection("Mushroom Grow Kits", "grow-kits");
        assert_eq!(detect_collection_type(&c), None);
        assert!(!has_special_collections(&[c]));
    }

    #[test]
    fn descriptions_are_not_scanned() {
        let c = collection("Garden Tools", "garden-tools")
            .with_description("Huge sale on trowels this week");
        assert_eq!(detect_collection_type(&c), None);
    }

    #[test]
    fn short_keywords_match_as_substrings() {
        let c = collection("Newfoundland Gear", "newfoundland-gear");
        assert_eq!(
            detect_collection_type(&c),
            Some(SpecialCollectionType::NewArrivals)
        );
    }

    #[test]
    fn priority_order_breaks_multi_category_ties() {
        // "Final Sale Specials" holds sale, deals, and clearance keywords.
        let c = collection("Final Sale Specials", "final-sale");
        assert_eq!(detect_collection_type(&c), Some(SpecialCollectionType::Sale));
    }

    #[test]
    fn results_sort_by_display_priority() {
        let catalog = vec![
            collection("Clearance Items", "clearance-items"),
            collection("Summer Sale", "summer-sale"),
            collection("Best Sellers 2024", "best-sellers-2024"),
        ];
        let special = detect_special_collections(&catalog);
        let kinds: Vec<SpecialCollectionType> = special.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SpecialCollectionType::Sale,
                SpecialCollectionType::BestSellers,
                SpecialCollectionType::Clearance,
            ]
        );
    }

    #[test]
    fn first_match_in_input_order_claims_a_category() {
        let catalog = vec![
            collection("Summer Sale", "summer-sale"),
            collection("Winter Sale Event", "winter-sale"),
        ];
        let special = detect_special_collections(&catalog);
        assert_eq!(special.len(), 1);
        assert_eq!(special[0].collection.title, "Summer Sale");
    }

    #[test]
    fn output_never_exceeds_category_count() {
        let catalog: Vec<Collection> = (0..40)
            .map(|i| collection("Flash Sale", &format!("flash-sale-{i}")))
            .chain((0..40).map(|i| collection("Daily Deals", &format!("deals-{i}"))))
            .collect();
        let special = detect_special_collections(&catalog);
        assert_eq!(special.len(), 2);
    }

    #[test]
    fn display_attributes_are_filled_from_the_category() {
        let catalog = vec![collection("Best Sellers", "best-sellers")];
        let special = detect_special_collections(&catalog);
        assert_eq!(special[0].priority, 3);
        assert_eq!(special[0].label, "Best Sellers");
        assert_eq!(special[0].icon, "TrendingUp");
    }

    #[test]
    fn lookup_by_category_ignores_higher_priority_matches() {
        let catalog = vec![
            collection("Summer Sale", "summer-sale"),
            collection("Last Chance", "last-chance"),
        ];
        let found = special_collection_of_type(&catalog, SpecialCollectionType::Clearance);
        assert_eq!(found.map(|c| c.title.as_str()), Some("Last Chance"));
        assert!(special_collection_of_type(&catalog, SpecialCollectionType::Featured).is_none());
    }

    #[test]
    fn declaration_order_matches_priority_ranks() {
        let ranks: Vec<u8> = SpecialCollectionType::ALL
            .iter()
            .map(|kind| kind.priority())
            .collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn serialized_type_uses_kebab_case() {
        let catalog = vec![collection("Best Sellers", "best-sellers")];
        let special = detect_special_collections(&catalog);
        let json = serde_json::to_value(&special[0]).unwrap();
        assert_eq!(json["type"], "best-sellers");
        assert_eq!(json["label"], "Best Sellers");
        assert_eq!(json["collection"]["handle"], "best-sellers");
    }
}
