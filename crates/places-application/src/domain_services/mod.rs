//! Domain Services
//!
//! Pure services that turn raw rows into checked places.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`RowCodec`] | Raw row to typed place and back |
//! | [`SchemaValidator`] | Schema rules over a typed place |

/// Row codec
pub mod codec;
/// Schema validator
pub mod validator;

pub use codec::{RowCodec, RowFormat};
pub use validator::SchemaValidator;
