//! Configuration loading tests
//!
//! Loads run inside `figment::Jail`, which serializes environment changes and
//! runs each test in its own temporary working directory.

use figment::Jail;
use places_application::use_cases::WarningPolicy;
use places_infrastructure::config::{AppConfig, ConfigLoader};
use places_infrastructure::constants::{DEFAULT_SEARCH_K, DEFAULT_STORE_PROVIDER};
use places_infrastructure::error_ext::ErrorContext;

fn load(loader: &ConfigLoader) -> figment::error::Result<AppConfig> {
    loader.load().map_err(|e| e.to_string().into())
}

#[test]
fn test_defaults_without_file_or_env() {
    Jail::expect_with(|_| {
        let config = load(&ConfigLoader::new())?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.dataset.store_provider, DEFAULT_STORE_PROVIDER);
        assert_eq!(config.search.default_k, DEFAULT_SEARCH_K);
        assert_eq!(config.dataset.warning_policy, WarningPolicy::Accept);
        Ok(())
    });
}

#[test]
fn test_discovers_places_toml_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "places.toml",
            r#"
            [dataset]
            expected_dimensions = 768
            warning_policy = "reject"

            [search]
            default_k = 3
            "#,
        )?;

        let config = load(&ConfigLoader::new())?;
        assert_eq!(config.dataset.expected_dimensions, Some(768));
        assert_eq!(config.dataset.warning_policy, WarningPolicy::Reject);
        assert_eq!(config.search.default_k, 3);
        // untouched sections keep their defaults
        assert_eq!(config.logging.level, "info");
        Ok(())
    });
}

#[test]
fn test_explicit_path_overrides_discovery() {
    Jail::expect_with(|jail| {
        jail.create_file("places.toml", "[search]\ndefault_k = 3\n")?;
        jail.create_file("custom.toml", "[search]\ndefault_k = 7\n")?;

        let config = load(&ConfigLoader::new().with_config_path("custom.toml"))?;
        assert_eq!(config.search.default_k, 7);
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_| {
        let loader = ConfigLoader::new().with_config_path("absent.toml");
        let config = load(&loader)?;
        assert_eq!(config, AppConfig::default());
        assert!(loader.config_path().is_some());
        Ok(())
    });
}

#[test]
fn test_env_overrides_file_with_double_underscore_nesting() {
    Jail::expect_with(|jail| {
        jail.create_file("places.toml", "[search]\ndefault_k = 3\n")?;
        jail.set_env("PLACES_SEARCH__DEFAULT_K", "12");
        jail.set_env("PLACES_DATASET__STORE_PROVIDER", "memory");
        jail.set_env("PLACES_IO__CSV_DELIMITER", ";");

        let config = load(&ConfigLoader::new())?;
        assert_eq!(config.search.default_k, 12);
        assert_eq!(config.io.csv_delimiter, ';');
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("PLACES_SEARCH__DEFAULT_K", "12");
        jail.set_env("ATLAS_SEARCH__DEFAULT_K", "4");

        let config = load(&ConfigLoader::new().with_env_prefix("ATLAS"))?;
        assert_eq!(config.search.default_k, 4);
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("places.toml", "[logging]\nlevel = \"loud\"\n")?;
        let err = ConfigLoader::new().load().expect_err("invalid level");
        assert!(err.to_string().contains("Invalid log level"));
        Ok(())
    });
}

#[test]
fn test_zero_default_k_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("PLACES_SEARCH__DEFAULT_K", "0");
        let err = ConfigLoader::new().load().expect_err("k of zero");
        assert!(err.to_string().contains("Configuration validation failed"));
        Ok(())
    });
}

#[test]
fn test_one_dimensional_store_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("places.toml", "[dataset]\nexpected_dimensions = 1\n")?;
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_non_ascii_delimiter_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("places.toml", "[io]\ncsv_delimiter = \"§\"\n")?;
        let err = ConfigLoader::new().load().expect_err("delimiter");
        assert!(err.to_string().contains("CSV delimiter"));
        Ok(())
    });
}

#[test]
fn test_unknown_warning_policy_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file("places.toml", "[dataset]\nwarning_policy = \"maybe\"\n")?;
        let err = ConfigLoader::new().load().expect_err("policy");
        assert!(err.to_string().contains("Failed to extract configuration"));
        Ok(())
    });
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("saved.toml");

    let mut config = AppConfig::default();
    config.dataset.expected_dimensions = Some(384);
    config.search.parallel_threshold = 128;
    config.io.csv_has_headers = false;

    let loader = ConfigLoader::new();
    loader.save_to_file(&config, &path).expect("save");

    let text = std::fs::read_to_string(&path)
        .io_context("read back")
        .expect("saved file");
    assert!(text.contains("[dataset]"));
    assert!(text.contains("expected_dimensions = 384"));

    Jail::expect_with(|_| {
        let loaded = load(&ConfigLoader::new().with_config_path(&path))?;
        assert_eq!(loaded, config);
        Ok(())
    });
}

#[test]
fn test_csv_options_from_io_config() {
    let mut config = AppConfig::default();
    config.io.csv_delimiter = '\t';
    config.io.csv_has_headers = false;

    let options = config.io.csv_options().expect("ascii delimiter");
    assert_eq!(options.delimiter, b'\t');
    assert!(!options.has_headers);
}
