use std::collections::HashMap;
use std::fs;

use indoc::indoc;
use navmap::config::{load_config_from_path, ConfigError, CONFIG_FILE_NAME};
use navmap::StoreConfig;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn loads_a_config_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [store]
            name = "Kestrel Supply"

            [navigation]
            main_menu = "header"
            max_fallback_collections = 3
        "#},
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.store.name, "Kestrel Supply");
    assert_eq!(config.navigation.main_menu, "header");
    assert_eq!(config.navigation.max_fallback_collections, 3);
    // Untouched sections keep their defaults.
    assert_eq!(config.currency.code, "USD");
}

#[test]
fn missing_file_reports_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    let err = load_config_from_path(&path).unwrap_err();
    match err {
        ConfigError::Io { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn malformed_toml_reports_a_parse_error_naming_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[store\nname = ").unwrap();

    let err = load_config_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}

#[test]
fn out_of_range_values_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [navigation]
            max_fallback_collections = 0
        "#},
    )
    .unwrap();

    let err = load_config_from_path(&path).unwrap_err();
    match err {
        ConfigError::Invalid { reason, .. } => {
            assert!(reason.contains("max_fallback_collections"));
        }
        other => panic!("expected Invalid error, got {other:?}"),
    }
}

#[test]
fn environment_overrides_win_over_file_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [store]
            name = "File Store"

            [currency]
            code = "USD"
            symbol = "$"
        "#},
    )
    .unwrap();

    let mut config = load_config_from_path(&path).unwrap();

    let mut env = HashMap::new();
    env.insert("NAVMAP_STORE_NAME".to_string(), "Env Store".to_string());
    env.insert("NAVMAP_CURRENCY_SYMBOL".to_string(), "€".to_string());
    config.apply_overrides(|key| env.get(key).cloned());

    assert_eq!(config.store.name, "Env Store");
    assert_eq!(config.currency.symbol, "€");
    // File values without overrides survive.
    assert_eq!(config.currency.code, "USD");
}

#[test]
fn configs_written_back_to_toml_reload_identically() {
    let mut config = StoreConfig::default();
    config.store.name = "Round Trip".to_string();
    config.navigation.max_fallback_collections = 9;
    config.features.enable_blog = false;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

    let reloaded = load_config_from_path(&path).unwrap();
    assert_eq!(reloaded, config);
}
