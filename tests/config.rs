use offerbot::catalog::config::{CatalogConfig, DEFAULT_FAMILY_MARKER};
use offerbot::catalog::SourceMode;
use offerbot::Config;
use serial_test::serial;

fn clear_catalog_env() {
    std::env::remove_var("CATALOG_URL");
    std::env::remove_var("CATALOG_SOURCE_MODE");
    std::env::remove_var("CATALOG_FAMILY_MARKER");
    std::env::remove_var("CATALOG_PART_KEYWORDS");
}

#[test]
#[serial]
fn catalog_config_missing_url() {
    clear_catalog_env();
    assert!(CatalogConfig::from_env().is_none());
}

#[test]
#[serial]
fn catalog_config_defaults() {
    clear_catalog_env();
    std::env::set_var("CATALOG_URL", "http://localhost/database.json");
    let cfg = CatalogConfig::from_env().unwrap();
    assert_eq!(cfg.url, "http://localhost/database.json");
    assert_eq!(cfg.mode, SourceMode::PlainNames);
    assert_eq!(cfg.family_marker, DEFAULT_FAMILY_MARKER);
    assert!(cfg.part_keywords.iter().any(|kw| kw == "Chassis"));
}

#[test]
#[serial]
fn catalog_config_records_mode_and_overrides() {
    clear_catalog_env();
    std::env::set_var("CATALOG_URL", "http://localhost/items.json");
    std::env::set_var("CATALOG_SOURCE_MODE", "records");
    std::env::set_var("CATALOG_FAMILY_MARKER", "Vandal");
    std::env::set_var("CATALOG_PART_KEYWORDS", "Barrel, Receiver ,Stock,");
    let cfg = CatalogConfig::from_env().unwrap();
    assert_eq!(cfg.mode, SourceMode::Records);
    assert_eq!(cfg.family_marker, "Vandal");
    assert_eq!(cfg.part_keywords, vec!["Barrel", "Receiver", "Stock"]);
}

#[test]
#[serial]
fn config_from_env_wraps_catalog() {
    clear_catalog_env();
    std::env::set_var("CATALOG_URL", "http://localhost/database.json");
    let cfg = Config::from_env();
    assert!(cfg.catalog.is_some());
}
