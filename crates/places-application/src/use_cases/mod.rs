//! Use Cases
//!
//! | Use Case | Description |
//! |----------|-------------|
//! | [`IngestionService`] | Decode, validate and store a batch of rows |
//! | [`SearchService`] | Similarity queries over a store |
//! | [`ExportService`] | Write a store back out as rows |

/// Batch ingestion
pub mod ingestion_service;
/// Store export
pub mod export_service;
/// Similarity search
pub mod search_service;

pub use export_service::ExportService;
pub use ingestion_service::{IngestionService, WarningPolicy};
pub use search_service::SearchService;
