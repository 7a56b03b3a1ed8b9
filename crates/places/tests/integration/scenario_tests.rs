//! Reference scenarios over the public API

use std::sync::Arc;

use places::prelude::*;

const JAIPUR: [&str; 9] = [
    "Rajasthan",
    "Jaipur",
    "26.9124",
    "75.7873",
    "https://www.google.com/maps?q=26.9124,75.7873",
    "Jaipur...",
    "[]",
    "[]",
    "[0.1,0.2,0.3]",
];

fn place(city: &str, vector: Vec<f32>) -> Place {
    Place::new(
        "Rajasthan",
        city,
        26.9,
        75.8,
        "https://www.google.com/maps?q=26.9,75.8",
        vector,
    )
}

#[test]
fn test_decode_reference_row_into_valid_place() {
    let row: RawRow = places::domain::constants::COLUMNS
        .iter()
        .zip(JAIPUR)
        .map(|(column, value)| (column.to_string(), RawValue::from(value)))
        .collect();

    let place = RowCodec::new().decode(&row).expect("decodes");
    assert_eq!(place.state_name, "Rajasthan");
    assert_eq!(place.city_name, "Jaipur");
    assert_eq!(place.latitude, Some(26.9124));
    assert_eq!(place.longitude, Some(75.7873));
    assert_eq!(place.wikipedia_content.as_deref(), Some("Jaipur..."));
    assert_eq!(place.unsplash_images, Some(vec![]));
    assert_eq!(place.airbnb_listings, Some(vec![]));
    assert_eq!(place.vector_embeddings, Some(vec![0.1, 0.2, 0.3]));

    let result = SchemaValidator::default().validate(&place, None);
    assert!(result.is_valid(), "{:?}", result.issues());
}

#[test]
fn test_insert_into_768_dim_store_is_dimension_mismatch() {
    let store = InMemoryPlaceStore::with_dimensions(768);
    let err = store
        .insert(place("Jaipur", vec![0.1, 0.2, 0.3]))
        .expect_err("3 != 768");

    assert!(matches!(
        err,
        Error::DimensionMismatch {
            expected: 768,
            actual: 3
        }
    ));
    assert!(store.is_empty());
}

#[test]
fn test_latitude_95_is_one_out_of_range_error() {
    let mut p = place("Jaipur", vec![0.1, 0.2, 0.3]);
    p.latitude = Some(95.0);

    let result = SchemaValidator::default().validate(&p, None);
    assert_eq!(result.issues().len(), 1);
    let issue = &result.issues()[0];
    assert_eq!(issue.field, "latitude");
    assert_eq!(issue.reason, ReasonCode::OutOfRange);
    assert_eq!(issue.severity, Severity::Error);
}

#[test]
fn test_query_on_empty_store_is_invalid_argument() {
    let store: Arc<dyn PlaceStore> = Arc::new(InMemoryPlaceStore::new());
    let index = LinearScanIndex::new(store);
    let err = index.query(&[0.1, 0.2, 0.3], 1).expect_err("empty");
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_equal_scores_keep_insertion_order() {
    let store: Arc<dyn PlaceStore> = Arc::new(InMemoryPlaceStore::new());
    // A and B are identical, so they score exactly alike
    store.insert(place("A", vec![0.9, 0.1, 0.4])).expect("A");
    store.insert(place("B", vec![0.9, 0.1, 0.4])).expect("B");
    store.insert(place("C", vec![-0.9, 0.1, 0.0])).expect("C");

    let index = LinearScanIndex::new(Arc::clone(&store));
    let results = index.query(&[0.9, 0.1, 0.4], 2).expect("query");

    let cities: Vec<&str> = results.iter().map(|r| r.place.city_name.as_str()).collect();
    assert_eq!(cities, vec!["A", "B"]);
    assert_eq!(results[0].score, results[1].score);
    assert!(results[0].position < results[1].position);
}
