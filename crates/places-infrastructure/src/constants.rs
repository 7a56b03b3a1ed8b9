//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Schema constants are defined in `places_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "places.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "places";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "PLACES";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_FILTER: &str = "PLACES_LOG";

/// File stem used when the log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "places";

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

/// Place store provider used when none is configured
pub const DEFAULT_STORE_PROVIDER: &str = "memory";

/// Similarity index provider used when none is configured
pub const DEFAULT_INDEX_PROVIDER: &str = "linear";

// ============================================================================
// SEARCH CONSTANTS
// ============================================================================

/// Result count used when a query names none
pub const DEFAULT_SEARCH_K: usize = 10;

/// Store size from which the linear index scores in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

// ============================================================================
// ROW IO CONSTANTS
// ============================================================================

/// Default CSV field delimiter
pub const DEFAULT_CSV_DELIMITER: char = ',';
