//! Fallback menu assembly and storefront URL normalization.

use crate::config::NavigationConfig;
use crate::core::{Collection, MenuItem};

/// Static menu used when a store exposes no menu and no collections.
pub fn basic_fallback_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("home", "Home", "/"),
        MenuItem::new("shop", "Shop", "/collections/all"),
        MenuItem::new("about", "About", "/pages/about"),
        MenuItem::new("contact", "Contact", "/pages/contact"),
    ]
}

/// Menu generated from the catalog when a store has no menu configured.
///
/// Lists up to `nav.max_fallback_collections` collections under a
/// "Collections" entry. An empty catalog falls back to
/// [`basic_fallback_menu`].
pub fn fallback_menu(collections: &[Collection], nav: &NavigationConfig) -> Vec<MenuItem> {
    if collections.is_empty() {
        return basic_fallback_menu();
    }

    let collection_items: Vec<MenuItem> = collections
        .iter()
        .take(nav.max_fallback_collections)
        .map(|collection| {
            MenuItem::new(
                format!("collection-{}", collection.id),
                collection.title.clone(),
                format!("/collections/{}", collection.handle),
            )
        })
        .collect();

    vec![
        MenuItem::new("home", "Home", "/"),
        MenuItem::with_items(
            "collections",
            "Collections",
            "/collections/all",
            collection_items,
        ),
        MenuItem::new("shop-all", "Shop All", "/collections/all"),
        MenuItem::new("blogs", "Blog", "/blogs"),
    ]
}

/// Rewrite a menu URL to a storefront-relative path.
///
/// Absolute URLs keep only their path, dropping host, query, and
/// fragment. A single trailing slash is stripped and an empty result
/// becomes "/". Strings without a scheme are treated as already
/// relative and only get the trailing-slash treatment.
pub fn normalize_storefront_url(url: &str) -> String {
    let path = absolute_url_path(url).unwrap_or(url);
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

fn absolute_url_path(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once("://")?;
    let valid_scheme = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return None;
    }

    let path = match rest.char_indices().find(|&(_, c)| matches!(c, '/' | '?' | '#')) {
        Some((idx, '/')) => &rest[idx..],
        // Host with no path, possibly followed by a query or fragment.
        _ => return Some("/"),
    };

    match path.char_indices().find(|&(_, c)| matches!(c, '?' | '#')) {
        Some((idx, _)) => Some(&path[..idx]),
        None => Some(path),
    }
}
