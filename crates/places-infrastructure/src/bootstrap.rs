//! Composition root
//!
//! Resolves the configured store and index through the provider registries
//! and wires the application services around them.
//!
//! ```text
//! AppConfig → registry configs → linkme registries → Arc<dyn Port> → services
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = bootstrap(&config)?;
//!
//! let source = CsvRowSource::from_path("places.csv", config.io.csv_options()?)?;
//! let summary = context.ingestion().ingest(source);
//! let nearest = context.search().search(&query, None)?;
//! ```

use std::sync::Arc;

use places_application::domain_services::SchemaValidator;
use places_application::ports::registry::{
    PlaceStoreProviderConfig, SimilarityIndexProviderConfig, resolve_place_store_provider,
    resolve_similarity_index_provider,
};
use places_application::use_cases::{ExportService, IngestionService, SearchService};
use places_domain::error::Result;
use places_domain::ports::infrastructure::ValidationReporter;
use places_domain::ports::providers::{PlaceStore, SimilarityIndex};
use places_domain::value_objects::StoreStats;
use places_providers::TracingValidationReporter;
use tracing::info;

use crate::config::AppConfig;
use crate::error_ext::provider_error;

/// Wired store, index and services for one dataset
pub struct PlacesContext {
    /// Configuration the context was built from
    pub config: Arc<AppConfig>,

    store: Arc<dyn PlaceStore>,
    index: Arc<dyn SimilarityIndex>,
    ingestion: IngestionService,
    search: SearchService,
    export: ExportService,
}

impl PlacesContext {
    /// The dataset store
    pub fn store(&self) -> Arc<dyn PlaceStore> {
        Arc::clone(&self.store)
    }

    /// The similarity index over the store
    pub fn index(&self) -> Arc<dyn SimilarityIndex> {
        Arc::clone(&self.index)
    }

    /// Batch ingestion into the store
    pub fn ingestion(&self) -> &IngestionService {
        &self.ingestion
    }

    /// Similarity queries
    pub fn search(&self) -> &SearchService {
        &self.search
    }

    /// Export of the store as rows
    pub fn export(&self) -> &ExportService {
        &self.export
    }

    /// Store statistics
    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }
}

impl std::fmt::Debug for PlacesContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesContext")
            .field("store", &self.store.provider_name())
            .field("index", &self.index.provider_name())
            .finish_non_exhaustive()
    }
}

/// Build a context that reports validation outcomes as tracing events
pub fn bootstrap(config: &AppConfig) -> Result<PlacesContext> {
    bootstrap_with_reporter(config, Arc::new(TracingValidationReporter::new()))
}

/// Build a context with a caller-supplied validation reporter
pub fn bootstrap_with_reporter(
    config: &AppConfig,
    reporter: Arc<dyn ValidationReporter>,
) -> Result<PlacesContext> {
    let store = resolve_place_store_provider(&store_provider_config(config))
        .map_err(|e| provider_error("place store", e))?;
    let index = resolve_similarity_index_provider(&index_provider_config(config), Arc::clone(&store))
        .map_err(|e| provider_error("similarity index", e))?;

    let validator = SchemaValidator::new(config.dataset.text_soft_limit);
    let ingestion = IngestionService::new(Arc::clone(&store), validator, reporter)
        .with_warning_policy(config.dataset.warning_policy);
    let search = SearchService::new(
        Arc::clone(&store),
        Arc::clone(&index),
        config.search.default_k,
    );
    let export = ExportService::new(Arc::clone(&store));

    info!(
        store = store.provider_name(),
        index = index.provider_name(),
        dimensions = ?config.dataset.expected_dimensions,
        "Places context ready"
    );

    Ok(PlacesContext {
        config: Arc::new(config.clone()),
        store,
        index,
        ingestion,
        search,
        export,
    })
}

fn store_provider_config(config: &AppConfig) -> PlaceStoreProviderConfig {
    let registry_config = PlaceStoreProviderConfig::new(&config.dataset.store_provider);
    match config.dataset.expected_dimensions {
        Some(dimensions) => registry_config.with_dimensions(dimensions),
        None => registry_config,
    }
}

fn index_provider_config(config: &AppConfig) -> SimilarityIndexProviderConfig {
    SimilarityIndexProviderConfig::new(&config.search.index_provider)
        .with_parallel_threshold(config.search.parallel_threshold)
}
