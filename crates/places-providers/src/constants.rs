//! Provider-specific constants

/// Registry name of the in-memory store
pub const MEMORY_STORE_PROVIDER: &str = "memory";

/// Registry name of the linear-scan index
pub const LINEAR_INDEX_PROVIDER: &str = "linear";

/// Store size from which the linear scan scores places in parallel
pub const PARALLEL_THRESHOLD_DEFAULT: usize = 4096;
