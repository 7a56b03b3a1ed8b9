//! Configuration types module

pub mod app;
pub mod dataset;
pub mod io;
pub mod logging;
pub mod search;

// Re-export main types
pub use app::AppConfig;
pub use dataset::DatasetConfig;
pub use io::IoConfig;
pub use logging::LoggingConfig;
pub use search::SearchConfig;
