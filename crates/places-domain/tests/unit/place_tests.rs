//! Unit tests for the Place and Listing entities

use places_domain::{Listing, Place};

fn jaipur() -> Place {
    Place::new(
        "Rajasthan",
        "Jaipur",
        26.9124,
        75.7873,
        "https://www.google.com/maps?q=26.9124,75.7873",
        vec![0.1, 0.2, 0.3],
    )
}

#[test]
fn test_place_creation() {
    let place = jaipur();
    assert_eq!(place.key(), ("Rajasthan", "Jaipur"));
    assert_eq!(place.latitude, Some(26.9124));
    assert_eq!(place.dimensions(), Some(3));
    assert!(place.wikipedia_content.is_none());
}

#[test]
fn test_absent_sequences_read_as_empty() {
    let place = jaipur();
    assert!(place.unsplash_images.is_none());
    assert!(place.images().is_empty());
    assert!(place.listings().is_empty());
}

#[test]
fn test_explicit_empty_differs_from_absent() {
    let absent = jaipur();
    let empty = jaipur().with_images(Vec::new());
    assert_ne!(absent, empty);
    assert_eq!(absent.images(), empty.images());
}

#[test]
fn test_missing_vector() {
    let mut place = jaipur();
    place.vector_embeddings = None;
    assert_eq!(place.dimensions(), None);
    assert!(place.embedding().is_empty());
}

#[test]
fn test_listing_builder() {
    let listing = Listing::new("L1", "https://www.airbnb.com/rooms/1", 120.0)
        .with_rating(4.8)
        .with_reviews(56);
    assert_eq!(listing.rating, Some(4.8));
    assert_eq!(listing.reviews, Some(56));
}

#[test]
fn test_listing_serializes_in_fixed_key_order() {
    let listing = Listing::new("L1", "https://www.airbnb.com/rooms/1", 120.0)
        .with_rating(4.5)
        .with_reviews(3);
    let json = serde_json::to_string(&listing).unwrap();
    assert_eq!(
        json,
        r#"{"id":"L1","url":"https://www.airbnb.com/rooms/1","price":120.0,"rating":4.5,"reviews":3}"#
    );
}

#[test]
fn test_listing_omits_absent_optionals() {
    let listing = Listing::new("L2", "https://www.airbnb.com/rooms/2", 80.0);
    let json = serde_json::to_string(&listing).unwrap();
    assert!(!json.contains("rating"));
    assert!(!json.contains("reviews"));
}

#[test]
fn test_listing_numeric_id_becomes_text() {
    let listing: Listing = serde_json::from_str(
        r#"{"id": 48213, "url": "https://www.airbnb.com/rooms/48213", "price": 99}"#,
    )
    .unwrap();
    assert_eq!(listing.id, "48213");
    assert_eq!(listing.price, 99.0);
    assert_eq!(listing.rating, None);
}

#[test]
fn test_listing_null_rating_is_absent() {
    let listing: Listing = serde_json::from_str(
        r#"{"id": "a", "url": "https://x.example/a", "price": 1.5, "rating": null}"#,
    )
    .unwrap();
    assert_eq!(listing.rating, None);
}
