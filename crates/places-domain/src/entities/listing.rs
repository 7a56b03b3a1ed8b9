//! Short-term rental listing attached to a place

use serde::{Deserialize, Deserializer, Serialize};

/// Entity: Rental Listing
///
/// Field order is the serialization order (`id, url, price, rating, reviews`),
/// which keeps the JSON text of a listing array deterministic.
///
/// ## Business Rules
///
/// - `id` is unique within the parent place's listing sequence only
/// - `price` is a non-negative per-night amount in a caller-defined currency
/// - `rating` lies in `[0, 5]` when present
/// - `reviews` is non-negative when present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Identifier, numeric ids are kept in their decimal text form
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    /// Listing page
    pub url: String,
    /// Per-night price
    pub price: f64,
    /// Average guest rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of guest reviews
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<i64>,
}

impl Listing {
    /// Create a listing without rating or review count
    pub fn new(id: impl Into<String>, url: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            price,
            rating: None,
            reviews: None,
        }
    }

    /// Set the rating
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the review count
    #[must_use]
    pub fn with_reviews(mut self, reviews: i64) -> Self {
        self.reviews = Some(reviews);
        self
    }
}

fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
