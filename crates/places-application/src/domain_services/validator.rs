//! Schema Validator
//!
//! Checks a decoded [`Place`] against the dataset schema. All rules run
//! independently and every issue is collected; issues come back in column
//! order so the same place always yields the same result.

use std::collections::HashSet;

use places_domain::constants::{
    COLUMN_AIRBNB_LISTINGS, COLUMN_CITY_NAME, COLUMN_GOOGLE_MAPS_URL, COLUMN_LATITUDE,
    COLUMN_LONGITUDE, COLUMN_STATE_NAME, COLUMN_UNSPLASH_IMAGES, COLUMN_VECTOR_EMBEDDINGS,
    COLUMN_WIKIPEDIA_CONTENT, EMBEDDING_MIN_DIMENSIONS, LATITUDE_RANGE, LONGITUDE_RANGE,
    RATING_RANGE, TEXT_SOFT_LIMIT_DEFAULT,
};
use places_domain::entities::{Listing, Place};
use places_domain::value_objects::{ReasonCode, ValidationIssue, ValidationResult};
use unicode_segmentation::UnicodeSegmentation;
use url::Url;

/// Schema validator service
///
/// ## Business Rules
///
/// - Required text counts as missing when blank
/// - Coordinates, listing ratings, prices and review counts are range checked;
///   non-finite numbers are out of range
/// - Map links, image links and listing links must be absolute URIs with a host
/// - The embedding has at least two finite components and, when the store has
///   one, the store's dimensionality
/// - Listing ids are non-empty and unique within the place
/// - Overlong `wikipedia_content` is the only warning
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator {
    text_soft_limit: usize,
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new(TEXT_SOFT_LIMIT_DEFAULT)
    }
}

impl SchemaValidator {
    /// Create a validator with the given `wikipedia_content` limit in characters
    pub fn new(text_soft_limit: usize) -> Self {
        Self { text_soft_limit }
    }

    /// Configured soft limit for `wikipedia_content`
    pub fn text_soft_limit(&self) -> usize {
        self.text_soft_limit
    }

    /// Validate a place, optionally against an established dimensionality
    pub fn validate(&self, place: &Place, expected_dim: Option<usize>) -> ValidationResult {
        let mut issues = Vec::new();

        check_required_text(&mut issues, COLUMN_STATE_NAME, &place.state_name);
        check_required_text(&mut issues, COLUMN_CITY_NAME, &place.city_name);
        check_coordinate(&mut issues, COLUMN_LATITUDE, place.latitude, LATITUDE_RANGE);
        check_coordinate(&mut issues, COLUMN_LONGITUDE, place.longitude, LONGITUDE_RANGE);

        if place.google_maps_url.trim().is_empty() {
            issues.push(missing(COLUMN_GOOGLE_MAPS_URL));
        } else {
            check_uri(&mut issues, COLUMN_GOOGLE_MAPS_URL, &place.google_maps_url);
        }

        if let Some(content) = &place.wikipedia_content {
            self.check_text_length(&mut issues, content);
        }

        for (i, image) in place.images().iter().enumerate() {
            check_uri(&mut issues, &format!("{COLUMN_UNSPLASH_IMAGES}[{i}]"), image);
        }

        let mut seen_ids = HashSet::new();
        for (i, listing) in place.listings().iter().enumerate() {
            check_listing(&mut issues, i, listing, &mut seen_ids);
        }

        check_vector(&mut issues, place.vector_embeddings.as_deref(), expected_dim);

        ValidationResult::new(issues)
    }

    fn check_text_length(&self, issues: &mut Vec<ValidationIssue>, content: &str) {
        // Grapheme count never exceeds byte length
        if content.len() <= self.text_soft_limit {
            return;
        }
        let length = content.graphemes(true).count();
        if length > self.text_soft_limit {
            issues.push(ValidationIssue::new(
                COLUMN_WIKIPEDIA_CONTENT,
                ReasonCode::TextTooLong,
                format!(
                    "{length} characters exceeds the soft limit of {}",
                    self.text_soft_limit
                ),
            ));
        }
    }
}

fn missing(field: &str) -> ValidationIssue {
    ValidationIssue::new(field, ReasonCode::MissingField, "required field is missing")
}

fn check_required_text(issues: &mut Vec<ValidationIssue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(missing(field));
    }
}

fn check_coordinate(
    issues: &mut Vec<ValidationIssue>,
    field: &str,
    value: Option<f64>,
    (min, max): (f64, f64),
) {
    match value {
        None => issues.push(missing(field)),
        Some(v) if !(min..=max).contains(&v) => issues.push(ValidationIssue::new(
            field,
            ReasonCode::OutOfRange,
            format!("{v} is outside [{min}, {max}]"),
        )),
        Some(_) => {}
    }
}

fn check_uri(issues: &mut Vec<ValidationIssue>, field: &str, value: &str) {
    let problem = match Url::parse(value) {
        Ok(url) if url.host_str().is_some_and(|host| !host.is_empty()) => return,
        Ok(_) => "URI has no host".to_string(),
        Err(e) => e.to_string(),
    };
    issues.push(ValidationIssue::new(
        field,
        ReasonCode::MalformedUri,
        format!("'{value}' is not an absolute URI: {problem}"),
    ));
}

fn check_listing<'a>(
    issues: &mut Vec<ValidationIssue>,
    index: usize,
    listing: &'a Listing,
    seen_ids: &mut HashSet<&'a str>,
) {
    let field = |name: &str| format!("{COLUMN_AIRBNB_LISTINGS}[{index}].{name}");

    if listing.id.trim().is_empty() {
        issues.push(missing(&field("id")));
    } else if !seen_ids.insert(listing.id.as_str()) {
        issues.push(ValidationIssue::new(
            field("id"),
            ReasonCode::DuplicateId,
            format!("listing id '{}' appears more than once", listing.id),
        ));
    }

    if listing.url.trim().is_empty() {
        issues.push(missing(&field("url")));
    } else {
        check_uri(issues, &field("url"), &listing.url);
    }

    if !(listing.price.is_finite() && listing.price >= 0.0) {
        issues.push(ValidationIssue::new(
            field("price"),
            ReasonCode::OutOfRange,
            format!("price {} must be a non-negative number", listing.price),
        ));
    }

    if let Some(rating) = listing.rating {
        let (min, max) = RATING_RANGE;
        if !(min..=max).contains(&rating) {
            issues.push(ValidationIssue::new(
                field("rating"),
                ReasonCode::OutOfRange,
                format!("rating {rating} is outside [{min}, {max}]"),
            ));
        }
    }

    if let Some(reviews) = listing.reviews {
        if reviews < 0 {
            issues.push(ValidationIssue::new(
                field("reviews"),
                ReasonCode::OutOfRange,
                format!("review count {reviews} is negative"),
            ));
        }
    }
}

fn check_vector(
    issues: &mut Vec<ValidationIssue>,
    vector: Option<&[f32]>,
    expected_dim: Option<usize>,
) {
    let Some(vector) = vector else {
        issues.push(missing(COLUMN_VECTOR_EMBEDDINGS));
        return;
    };

    if vector.len() < EMBEDDING_MIN_DIMENSIONS {
        issues.push(ValidationIssue::new(
            COLUMN_VECTOR_EMBEDDINGS,
            ReasonCode::VectorTooShort,
            format!(
                "{} components, at least {EMBEDDING_MIN_DIMENSIONS} required",
                vector.len()
            ),
        ));
    }

    if let Some(expected) = expected_dim {
        if vector.len() != expected {
            issues.push(ValidationIssue::new(
                COLUMN_VECTOR_EMBEDDINGS,
                ReasonCode::DimensionMismatch,
                format!("expected {expected} components, got {}", vector.len()),
            ));
        }
    }

    if let Some(position) = vector.iter().position(|v| !v.is_finite()) {
        issues.push(ValidationIssue::new(
            COLUMN_VECTOR_EMBEDDINGS,
            ReasonCode::NonFiniteVector,
            format!("component {position} is not finite"),
        ));
    }
}
