//! Export Service Use Case
//!
//! Writes the contents of a store to a row sink in insertion order.

use std::sync::Arc;

use places_domain::error::Result;
use places_domain::ports::providers::{PlaceStore, RowSink};
use tracing::info;

use crate::domain_services::{RowCodec, RowFormat};

/// Export service implementation - encodes every stored place
pub struct ExportService {
    store: Arc<dyn PlaceStore>,
    codec: RowCodec,
}

impl ExportService {
    /// Create new export service over a store
    pub fn new(store: Arc<dyn PlaceStore>) -> Self {
        Self {
            store,
            codec: RowCodec::new(),
        }
    }

    /// Encode every place in `format` and write it to `sink`
    ///
    /// Works on one snapshot, so places inserted during the export are not
    /// written. Returns the number of rows written.
    pub fn export<K: RowSink + ?Sized>(&self, sink: &mut K, format: RowFormat) -> Result<usize> {
        let mut written = 0;
        for place in self.store.scan() {
            let row = self.codec.encode_as(&place, format)?;
            sink.write_row(&row)?;
            written += 1;
        }
        sink.finish()?;

        info!(rows = written, ?format, "Export finished");
        Ok(written)
    }
}
