//! # Configuration Tests
//!
//! Defaults, JSON deserialization, and validation.

use std::io::Write;

use mipsdis_core::DisasmError;
use mipsdis_core::config::{Config, GeneralConfig, ListingConfig};

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_words);
    assert_eq!(config.listing.base_address, 496);
    assert_eq!(config.listing.address_stride, 4);
    assert_eq!(config.listing.stop_address, Some(700));
    assert!(config.listing.skip_blank_lines);
}

#[test]
fn test_general_config_defaults() {
    assert!(!GeneralConfig::default().trace_words);
}

#[test]
fn test_empty_json_matches_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_json_keeps_other_defaults() {
    let config = Config::from_json(r#"{"listing": {"base_address": 0}}"#).unwrap();
    assert_eq!(config.listing.base_address, 0);
    assert_eq!(config.listing.address_stride, 4);
    assert_eq!(config.listing.stop_address, Some(700));
}

#[test]
fn test_null_stop_address_disables_limit() {
    let config = Config::from_json(r#"{"listing": {"stop_address": null}}"#).unwrap();
    assert_eq!(config.listing.stop_address, None);
}

#[test]
fn test_json_with_tracing() {
    let config = Config::from_json(r#"{"general": {"trace_words": true}}"#).unwrap();
    assert!(config.general.trace_words);
    assert_eq!(config.listing, ListingConfig::default());
}

#[test]
fn test_malformed_json_is_config_error() {
    let err = Config::from_json("{ not json").unwrap_err();
    assert!(matches!(err, DisasmError::Config(_)));
}

#[test]
fn test_zero_stride_rejected() {
    let err = Config::from_json(r#"{"listing": {"address_stride": 0}}"#).unwrap_err();
    assert!(matches!(err, DisasmError::InvalidConfig(_)));
}

#[test]
fn test_stop_not_above_base_rejected() {
    let err =
        Config::from_json(r#"{"listing": {"base_address": 700, "stop_address": 700}}"#).unwrap_err();
    assert!(matches!(err, DisasmError::InvalidConfig(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"listing": {"base_address": 1024, "stop_address": 2048}}"#)
        .unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.listing.base_address, 1024);
    assert_eq!(config.listing.stop_address, Some(2048));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DisasmError::Io(_)));
}
