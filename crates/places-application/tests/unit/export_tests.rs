//! Tests for the export use case

use std::sync::Arc;

use places_application::domain_services::{RowCodec, RowFormat};
use places_application::use_cases::ExportService;
use places_domain::ports::providers::{PlaceStore, RowSink};
use places_domain::{Listing, Place, RawRow, RawValue, Result};
use places_providers::InMemoryPlaceStore;

/// Sink keeping rows in memory
#[derive(Default)]
struct VecSink {
    rows: Vec<RawRow>,
    finished: bool,
}

impl RowSink for VecSink {
    fn write_row(&mut self, row: &RawRow) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

fn seeded_store() -> Arc<InMemoryPlaceStore> {
    let store = Arc::new(InMemoryPlaceStore::new());
    let places = [
        Place::new("Goa", "Panaji", 15.4909, 73.8278, "https://maps.example.com/p", vec![1.0, 0.0])
            .with_listings(vec![Listing::new("L9", "https://www.airbnb.com/rooms/9", 55.0)]),
        Place::new("Goa", "Margao", 15.2832, 73.9862, "https://maps.example.com/m", vec![0.0, 1.0])
            .with_images(vec!["https://images.unsplash.com/m".to_string()]),
    ];
    for place in places {
        store.insert(place).expect("insert");
    }
    store
}

#[test]
fn test_export_writes_every_place_in_order() {
    let store = seeded_store();
    let mut sink = VecSink::default();

    let written = ExportService::new(store.clone())
        .export(&mut sink, RowFormat::Flat)
        .expect("export");

    assert_eq!(written, 2);
    assert!(sink.finished);
    let codec = RowCodec::new();
    let decoded: Vec<Place> = sink
        .rows
        .iter()
        .map(|row| codec.decode(row).expect("decode"))
        .collect();
    let stored: Vec<Place> = store.scan().map(|p| (*p).clone()).collect();
    assert_eq!(decoded, stored);
}

#[test]
fn test_columnar_export_uses_native_values() {
    let store = seeded_store();
    let mut sink = VecSink::default();
    ExportService::new(store)
        .export(&mut sink, RowFormat::Columnar)
        .expect("export");

    assert!(matches!(
        sink.rows[0].get("airbnb_listings"),
        Some(RawValue::Json(serde_json::Value::Array(_)))
    ));
    assert!(matches!(
        sink.rows[0].get("latitude"),
        Some(RawValue::Json(serde_json::Value::Number(_)))
    ));
}

#[test]
fn test_export_of_empty_store_still_finishes() {
    let mut sink = VecSink::default();
    let written = ExportService::new(Arc::new(InMemoryPlaceStore::new()))
        .export(&mut sink, RowFormat::Flat)
        .expect("export");
    assert_eq!(written, 0);
    assert!(sink.finished);
}
