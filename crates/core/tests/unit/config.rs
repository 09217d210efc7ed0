//! # Configuration Tests
//!
//! Defaults, JSON deserialization, and expansion of the numbered series.

use std::fs;
use std::path::PathBuf;

use mipsdis_core::BatchError;
use mipsdis_core::config::{BatchConfig, Config};
use mipsdis_core::driver::Job;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.batch.base_dir, PathBuf::from("."));
    assert_eq!(config.batch.file_stem, "TESTE");
    assert_eq!(config.batch.first, 1);
    assert_eq!(config.batch.last, 10);
    assert_eq!(config.batch.extension, "txt");
    assert_eq!(config.batch.output_suffix, "-RESULTADO");
}

#[test]
fn test_default_series() {
    let jobs = BatchConfig::default().jobs();
    assert_eq!(jobs.len(), 10);
    assert_eq!(
        jobs[0],
        Job::new("./TESTE-01.txt", "./TESTE-01-RESULTADO.txt")
    );
    assert_eq!(
        jobs[9],
        Job::new("./TESTE-10.txt", "./TESTE-10-RESULTADO.txt")
    );
}

#[test]
fn test_listing_name_padding() {
    let batch = BatchConfig::default();
    assert_eq!(batch.listing_name(1), "TESTE-01");
    assert_eq!(batch.listing_name(10), "TESTE-10");
    assert_eq!(batch.listing_name(123), "TESTE-123");
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config.batch.last, 10);

    let config = Config::from_json_str(r#"{ "batch": {} }"#).unwrap();
    assert_eq!(config.batch.file_stem, "TESTE");
}

#[test]
fn test_partial_json() {
    let json = r#"{
        "batch": {
            "base_dir": "/data/listings",
            "file_stem": "PROG",
            "first": 3,
            "last": 4,
            "output_suffix": ".out"
        }
    }"#;
    let config = Config::from_json_str(json).unwrap();
    assert_eq!(config.batch.extension, "txt");
    assert_eq!(
        config.batch.jobs(),
        vec![
            Job::new("/data/listings/PROG-03.txt", "/data/listings/PROG-03.out.txt"),
            Job::new("/data/listings/PROG-04.txt", "/data/listings/PROG-04.out.txt"),
        ]
    );
}

#[test]
fn test_reversed_range_is_empty() {
    let config = Config::from_json_str(r#"{ "batch": { "first": 5, "last": 2 } }"#).unwrap();
    assert!(config.batch.jobs().is_empty());
}

#[test]
fn test_invalid_json() {
    let err = Config::from_json_str(r#"{ "batch": { "first": "one" } }"#).unwrap_err();
    assert!(matches!(err, BatchError::Config(_)));
    assert!(err.to_string().starts_with("invalid config:"));
}

#[test]
fn test_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mipsdis.json");
    fs::write(&path, r#"{ "batch": { "last": 2 } }"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.batch.jobs().len(), 2);
}

#[test]
fn test_from_missing_file() {
    let dir = tempdir().unwrap();
    let err = Config::from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(err.is_not_found());
}
