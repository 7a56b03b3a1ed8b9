//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`Place`] | One dataset record: coordinates, content and embedding |
//! | [`Listing`] | Rental listing nested in a place |

/// Rental listing sub-record
pub mod listing;
/// Place record
pub mod place;

pub use listing::Listing;
pub use place::Place;
