use std::time::Duration;
use system_intel::verbosity::filter_for_level;
use system_intel::{OutputFormat, SystemIntelConfig, VIEWER_FETCH_TIMEOUT_MS};

fn scratch_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("system_intel_{}_{}", std::process::id(), name))
        .join("system_intel.toml")
        .to_string_lossy()
        .to_string()
}

#[test]
fn test_default_config_is_valid() {
    let config = SystemIntelConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.api.timeout_ms, VIEWER_FETCH_TIMEOUT_MS);
    assert_eq!(config.timeout(), Duration::from_millis(40_000));
    assert_eq!(config.display.activity_segments, 5);
    assert_eq!(config.display.format, OutputFormat::Text);
}

#[test]
fn test_load_or_create_writes_then_reads() {
    let path = scratch_path("roundtrip");
    let _ = std::fs::remove_file(&path);

    let created = SystemIntelConfig::load_or_create(&path).expect("default config created");
    assert!(std::path::Path::new(&path).exists());

    let mut edited = created.clone();
    edited.api.timeout_ms = 1_500;
    edited.display.format = OutputFormat::Json;
    edited.save(&path).unwrap();

    let loaded = SystemIntelConfig::load_or_create(&path).unwrap();
    assert_eq!(loaded, edited);
    assert!(std::fs::read_to_string(&path).unwrap().contains("format = \"json\""));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = SystemIntelConfig::default();
    config.api.timeout_ms = 0;
    assert!(config.validate().is_err());

    let mut config = SystemIntelConfig::default();
    config.api.base_url = "ftp://example".to_string();
    assert!(config.validate().is_err());

    let mut config = SystemIntelConfig::default();
    config.display.activity_segments = 0;
    assert!(config.validate().is_err());

    let mut config = SystemIntelConfig::default();
    config.logging.api_logging = true;
    config.logging.api_log_path = " ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_verbosity_levels() {
    assert_eq!(filter_for_level(0), "warn");
    assert_eq!(filter_for_level(1), "info");
    assert_eq!(filter_for_level(2), "debug");
    assert_eq!(filter_for_level(9), "debug", "levels above 2 stay at full output");
}
