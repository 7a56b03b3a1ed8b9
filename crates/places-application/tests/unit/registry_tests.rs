//! Tests for provider registries
//!
//! Uses `extern crate places_providers` to force linkme registration of real
//! providers.

// Force linkme registration of all providers from places-providers
extern crate places_providers;

use places_application::ports::registry::*;

#[test]
fn test_registered_store_providers() {
    let providers = list_place_store_providers();
    assert!(
        providers.iter().any(|(name, _)| *name == "memory"),
        "memory store should be registered. Available: {providers:?}"
    );
}

#[test]
fn test_registered_index_providers() {
    let providers = list_similarity_index_providers();
    assert!(
        providers.iter().any(|(name, _)| *name == "linear"),
        "linear index should be registered. Available: {providers:?}"
    );
}

#[test]
fn test_resolved_store_and_index_work_together() {
    let store = resolve_place_store_provider(&PlaceStoreProviderConfig::new("memory"))
        .expect("memory store");
    let index = resolve_similarity_index_provider(
        &SimilarityIndexProviderConfig::new("linear"),
        store.clone(),
    )
    .expect("linear index");

    store
        .insert(places_domain::Place::new(
            "Punjab",
            "Amritsar",
            31.634,
            74.8723,
            "https://www.google.com/maps?q=31.634,74.8723",
            vec![0.2, 0.8],
        ))
        .expect("insert");
    let results = index.query(&[0.2, 0.8], 1).expect("query");
    assert_eq!(results[0].place.city_name, "Amritsar");
}

#[test]
fn test_unknown_store_provider() {
    let err = resolve_place_store_provider(&PlaceStoreProviderConfig::new("sqlite"))
        .err()
        .expect("unknown provider fails");
    assert!(err.contains("Unknown place store provider 'sqlite'"));
    assert!(err.contains("memory"));
}
