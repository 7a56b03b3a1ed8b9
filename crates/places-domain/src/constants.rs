//! Domain layer constants
//!
//! Column names of the flat row format and the numeric bounds of the schema.

// ============================================================================
// ROW FORMAT CONSTANTS
// ============================================================================

/// Canonical region name column
pub const COLUMN_STATE_NAME: &str = "state_name";

/// City name column
pub const COLUMN_CITY_NAME: &str = "city_name";

/// Latitude column
pub const COLUMN_LATITUDE: &str = "latitude";

/// Longitude column
pub const COLUMN_LONGITUDE: &str = "longitude";

/// Map link column
pub const COLUMN_GOOGLE_MAPS_URL: &str = "google_maps_url";

/// Free text column
pub const COLUMN_WIKIPEDIA_CONTENT: &str = "wikipedia_content";

/// JSON array of image URIs
pub const COLUMN_UNSPLASH_IMAGES: &str = "unsplash_images";

/// JSON array of listing objects
pub const COLUMN_AIRBNB_LISTINGS: &str = "airbnb_listings";

/// JSON array of numbers
pub const COLUMN_VECTOR_EMBEDDINGS: &str = "vector_embeddings";

/// Exact column order of the flat row format
pub const COLUMNS: [&str; 9] = [
    COLUMN_STATE_NAME,
    COLUMN_CITY_NAME,
    COLUMN_LATITUDE,
    COLUMN_LONGITUDE,
    COLUMN_GOOGLE_MAPS_URL,
    COLUMN_WIKIPEDIA_CONTENT,
    COLUMN_UNSPLASH_IMAGES,
    COLUMN_AIRBNB_LISTINGS,
    COLUMN_VECTOR_EMBEDDINGS,
];

// ============================================================================
// SCHEMA CONSTANTS
// ============================================================================

/// Latitude bounds in degrees
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Longitude bounds in degrees
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Listing rating bounds
pub const RATING_RANGE: (f64, f64) = (0.0, 5.0);

/// Smallest accepted embedding length
pub const EMBEDDING_MIN_DIMENSIONS: usize = 2;

/// Default soft limit for `wikipedia_content`, in characters
pub const TEXT_SOFT_LIMIT_DEFAULT: usize = 3000;

// ============================================================================
// SEARCH CONSTANTS
// ============================================================================

/// Stabilizer added to the norm product of the cosine score
pub const SIMILARITY_EPSILON: f64 = 1e-9;
