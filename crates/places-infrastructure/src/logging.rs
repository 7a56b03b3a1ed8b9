//! Structured logging with tracing
//!
//! One process-wide subscriber for the places services. Ingestion reports
//! rejected rows at `warn`, search timing goes to `debug`, and the batch
//! summaries land at `info`. `PLACES_LOG` takes a full filter directive such
//! as `places_application=debug`.

use std::ffi::OsStr;
use std::path::Path;

use places_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_ENV_FILTER};
use crate::error_ext::ErrorContext;

pub use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the places subscriber
///
/// `PLACES_LOG`, when set, replaces the configured level. Fails when the level
/// is unknown or a subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_FILTER).unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let mut layers = vec![stdout_layer(config.json_format)];
    if let Some(path) = &config.file_output {
        layers.push(file_layer(path, config.json_format));
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    info!(
        %level,
        json = config.json_format,
        file = ?config.file_output,
        "Places logging ready"
    );
    Ok(())
}

fn stdout_layer(json: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Daily rolling file next to the configured path, named after its stem
fn file_layer(path: &Path, json: bool) -> BoxedLayer {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM));
    let layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(directory, stem))
        .with_ansi(false)
        .with_target(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Parse a configured level name
///
/// Accepts `warning` as an alias of `warn`, in any case.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::Configuration {
            message: format!(
                "Invalid log level: {level}. Use trace, debug, info, warn, or error"
            ),
            source: None,
        }),
    }
}

/// Report a places.toml that was named but does not exist
pub fn log_missing_config_file(path: &Path) {
    warn!(
        path = %path.display(),
        "places.toml not found, using defaults and PLACES_ overrides"
    );
}

/// Summarize the dataset and search settings a loaded config will run with
pub fn log_dataset_settings(source: Option<&Path>, config: &AppConfig) {
    info!(
        source = %source.map_or_else(|| "defaults".to_string(), |p| p.display().to_string()),
        store = %config.dataset.store_provider,
        dimensions = ?config.dataset.expected_dimensions,
        warning_policy = ?config.dataset.warning_policy,
        text_soft_limit = config.dataset.text_soft_limit,
        index = %config.search.index_provider,
        default_k = config.search.default_k,
        "Places configuration loaded"
    );
}
