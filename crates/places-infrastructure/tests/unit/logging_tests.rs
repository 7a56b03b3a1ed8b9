//! Logging Tests

use std::path::Path;

use places_infrastructure::config::AppConfig;
use places_infrastructure::constants::DEFAULT_LOG_LEVEL;
use places_infrastructure::logging::{
    LoggingConfig, init_logging, log_dataset_settings, parse_log_level,
};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

#[test]
fn test_init_rejects_invalid_level_before_installing() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(config).is_err());
}

// The only test in this binary that installs the global subscriber
#[test]
fn test_init_with_file_output_installs_once() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        file_output: Some(dir.path().join("places.log")),
    };

    init_logging(config.clone()).expect("first install");
    tracing::info!(target: "places_test", "written to the rolling file");
    assert!(init_logging(config).is_err());
}

#[test]
fn test_settings_summary_accepts_missing_source() {
    let config = AppConfig::default();
    log_dataset_settings(None, &config);
    log_dataset_settings(Some(Path::new("places.toml")), &config);
}
