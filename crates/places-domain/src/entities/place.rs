//! Place entity - one record of the dataset

use crate::entities::Listing;
use serde::{Deserialize, Serialize};

/// Entity: Place
///
/// A city or locality with coordinates, associated content and a semantic
/// embedding. A `Place` is produced by the row codec, validated once at
/// ingestion and then kept immutable by the store.
///
/// Required fields that a raw row may omit are modelled so the validator can
/// report them: blank text means "not set", and `latitude`, `longitude` and
/// `vector_embeddings` are `None` when absent. Optional sequences distinguish
/// an absent column (`None`) from an explicit empty array (`Some(vec![])`).
///
/// ## Example
///
/// ```rust
/// use places_domain::entities::Place;
///
/// let place = Place::new(
///     "Rajasthan",
///     "Jaipur",
///     26.9124,
///     75.7873,
///     "https://www.google.com/maps?q=26.9124,75.7873",
///     vec![0.1, 0.2, 0.3],
/// );
/// assert_eq!(place.dimensions(), Some(3));
/// assert!(place.images().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Canonical region name
    pub state_name: String,
    /// City name
    pub city_name: String,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
    /// Map link
    pub google_maps_url: String,
    /// Encyclopedic description
    pub wikipedia_content: Option<String>,
    /// Image URIs in display order
    pub unsplash_images: Option<Vec<String>>,
    /// Rental listings in source order
    pub airbnb_listings: Option<Vec<Listing>>,
    /// Embedding vector
    pub vector_embeddings: Option<Vec<f32>>,
}

impl Place {
    /// Create a place with every required field set and no optional content
    pub fn new(
        state_name: impl Into<String>,
        city_name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        google_maps_url: impl Into<String>,
        vector_embeddings: Vec<f32>,
    ) -> Self {
        Self {
            state_name: state_name.into(),
            city_name: city_name.into(),
            latitude: Some(latitude),
            longitude: Some(longitude),
            google_maps_url: google_maps_url.into(),
            wikipedia_content: None,
            unsplash_images: None,
            airbnb_listings: None,
            vector_embeddings: Some(vector_embeddings),
        }
    }

    /// Set the description text
    #[must_use]
    pub fn with_wikipedia_content(mut self, content: impl Into<String>) -> Self {
        self.wikipedia_content = Some(content.into());
        self
    }

    /// Set the image URIs
    #[must_use]
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.unsplash_images = Some(images);
        self
    }

    /// Set the rental listings
    #[must_use]
    pub fn with_listings(mut self, listings: Vec<Listing>) -> Self {
        self.airbnb_listings = Some(listings);
        self
    }

    /// Image URIs, empty when the column was absent
    pub fn images(&self) -> &[String] {
        self.unsplash_images.as_deref().unwrap_or_default()
    }

    /// Listings, empty when the column was absent
    pub fn listings(&self) -> &[Listing] {
        self.airbnb_listings.as_deref().unwrap_or_default()
    }

    /// Embedding vector, empty when absent
    pub fn embedding(&self) -> &[f32] {
        self.vector_embeddings.as_deref().unwrap_or_default()
    }

    /// Embedding length, `None` when the vector is absent
    pub fn dimensions(&self) -> Option<usize> {
        self.vector_embeddings.as_ref().map(Vec::len)
    }

    /// Lookup key used by the store
    pub fn key(&self) -> (&str, &str) {
        (&self.state_name, &self.city_name)
    }
}
