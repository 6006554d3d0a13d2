//! Store configuration.
//!
//! Configuration is built once at startup and passed by reference to
//! whatever needs it. Values come from `.navmap.toml` when present,
//! with `NAVMAP_*` environment variables overriding individual fields
//! at load time. Nothing in this crate reads configuration ambiently.

mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_from_path, parse_config, ConfigError,
    CONFIG_FILE_NAME,
};

use serde::{Deserialize, Serialize};

fn default_store_name() -> String {
    "Your Store".to_string()
}

fn default_store_domain() -> String {
    "your-store.myshopify.com".to_string()
}

fn default_store_url() -> String {
    "https://yourdomain.com".to_string()
}

fn default_currency_code() -> String {
    "USD".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_main_menu() -> String {
    "main-menu".to_string()
}

fn default_footer_menu() -> String {
    "footer".to_string()
}

fn default_mobile_menu() -> String {
    "mobile-menu".to_string()
}

fn default_max_fallback_collections() -> usize {
    6
}

fn default_true() -> bool {
    true
}

/// Root configuration for a storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub store: StoreIdentity,

    #[serde(default)]
    pub currency: CurrencyConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub features: FeatureFlags,
}

/// Merchant identity shown in headers, footers, and page metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreIdentity {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_store_domain")]
    pub domain: String,

    #[serde(default = "default_store_url")]
    pub url: String,
}

impl Default for StoreIdentity {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            domain: default_store_domain(),
            url: default_store_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    #[serde(default = "default_currency_code")]
    pub code: String,

    #[serde(default = "default_currency_symbol")]
    pub symbol: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: default_currency_code(),
            symbol: default_currency_symbol(),
        }
    }
}

/// Menu handles and fallback sizing for navigation assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Handle of the menu rendered in the desktop header.
    #[serde(default = "default_main_menu")]
    pub main_menu: String,

    /// Handle of the menu rendered in the footer.
    #[serde(default = "default_footer_menu")]
    pub footer_menu: String,

    /// Handle of the menu rendered in the mobile drawer.
    #[serde(default = "default_mobile_menu")]
    pub mobile_menu: String,

    /// Collections listed under "Collections" in a generated fallback menu.
    #[serde(default = "default_max_fallback_collections")]
    pub max_fallback_collections: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            main_menu: default_main_menu(),
            footer_menu: default_footer_menu(),
            mobile_menu: default_mobile_menu(),
            max_fallback_collections: default_max_fallback_collections(),
        }
    }
}

/// Storefront feature toggles. All default to enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub show_promos: bool,

    #[serde(default = "default_true")]
    pub enable_search: bool,

    #[serde(default = "default_true")]
    pub enable_wishlist: bool,

    #[serde(default = "default_true")]
    pub enable_reviews: bool,

    #[serde(default = "default_true")]
    pub enable_blog: bool,

    #[serde(default = "default_true")]
    pub enable_collections: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            show_promos: true,
            enable_search: true,
            enable_wishlist: true,
            enable_reviews: true,
            enable_blog: true,
            enable_collections: true,
        }
    }
}

impl StoreConfig {
    /// Check field values a file could plausibly get wrong.
    pub fn validate(&self) -> Result<(), String> {
        if self.store.name.trim().is_empty() {
            return Err("store.name must not be empty".to_string());
        }
        if self.currency.code.trim().is_empty() {
            return Err("currency.code must not be empty".to_string());
        }
        if self.navigation.main_menu.trim().is_empty() {
            return Err("navigation.main_menu must not be empty".to_string());
        }
        if self.navigation.footer_menu.trim().is_empty() {
            return Err("navigation.footer_menu must not be empty".to_string());
        }
        if self.navigation.max_fallback_collections == 0 {
            return Err("navigation.max_fallback_collections must be at least 1".to_string());
        }
        Ok(())
    }

    /// Apply `NAVMAP_*` environment overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override seam behind [`apply_env_overrides`]; tests substitute a
    /// fixed map for the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("NAVMAP_STORE_NAME") {
            self.store.name = name;
        }
        if let Some(domain) = lookup("NAVMAP_STORE_DOMAIN") {
            self.store.domain = domain;
        }
        if let Some(url) = lookup("NAVMAP_STORE_URL") {
            self.store.url = url;
        }
        if let Some(code) = lookup("NAVMAP_CURRENCY_CODE") {
            self.currency.code = code;
        }
        if let Some(symbol) = lookup("NAVMAP_CURRENCY_SYMBOL") {
            self.currency.symbol = symbol;
        }
        if let Some(handle) = lookup("NAVMAP_MAIN_MENU") {
            self.navigation.main_menu = handle;
        }
        if let Some(handle) = lookup("NAVMAP_FOOTER_MENU") {
            self.navigation.footer_menu = handle;
        }
        if let Some(handle) = lookup("NAVMAP_MOBILE_MENU") {
            self.navigation.mobile_menu = handle;
        }
        if let Some(value) = lookup("NAVMAP_SHOW_PROMOS") {
            apply_flag(&mut self.features.show_promos, "NAVMAP_SHOW_PROMOS", &value);
        }
        if let Some(value) = lookup("NAVMAP_ENABLE_SEARCH") {
            apply_flag(
                &mut self.features.enable_search,
                "NAVMAP_ENABLE_SEARCH",
                &value,
            );
        }
    }
}

fn apply_flag(flag: &mut bool, key: &str, value: &str) {
    match value.parse::<bool>() {
        Ok(parsed) => *flag = parsed,
        Err(_) => log::warn!("ignoring {key}={value}: expected true or false"),
    }
}

/// Pull the display symbol out of a `money_format` template such as
/// `"${{amount}}"` or `"{{amount}} kr"`. Falls back to `"$"`.
pub fn extract_currency_symbol(money_format: &str) -> String {
    let leading: String = money_format
        .chars()
        .take_while(|c| !c.is_ascii_digit() && *c != '{')
        .collect();
    let leading = leading.trim();
    if !leading.is_empty() {
        return leading.to_string();
    }

    let trailing: String = money_format
        .chars()
        .rev()
        .take_while(|c| !c.is_ascii_digit() && *c != '}')
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    let trailing = trailing.trim();
    if !trailing.is_empty() {
        return trailing.to_string();
    }

    "$".to_string()
}
