//! Row Codec
//!
//! Converts between raw rows and typed [`Place`]s. Nested fields arrive either
//! as JSON text (flat sources) or as native JSON values (columnar sources);
//! both decode to the same place.
//!
//! Decoding only fails on structural problems: a JSON-bearing column that is
//! not the expected array shape, or a coordinate that is not a number. Blank or
//! missing required fields decode to "not set" and are left to the validator.

use places_domain::constants::{
    COLUMN_AIRBNB_LISTINGS, COLUMN_CITY_NAME, COLUMN_GOOGLE_MAPS_URL, COLUMN_LATITUDE,
    COLUMN_LONGITUDE, COLUMN_STATE_NAME, COLUMN_UNSPLASH_IMAGES, COLUMN_VECTOR_EMBEDDINGS,
    COLUMN_WIKIPEDIA_CONTENT,
};
use places_domain::entities::{Listing, Place};
use places_domain::error::{Error, Result};
use places_domain::value_objects::{RawRow, RawValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Representation used when encoding nested fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowFormat {
    /// Every field as text, nested fields as JSON text (CSV)
    #[default]
    Flat,
    /// Numbers and nested fields as native JSON values (JSON Lines)
    Columnar,
}

/// Row codec service
///
/// Stateless; `decode(encode(p)) == p` holds for every place produced by a
/// successful decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowCodec;

impl RowCodec {
    /// Create a codec
    pub fn new() -> Self {
        Self
    }

    /// Decode a raw row into a place
    pub fn decode(&self, row: &RawRow) -> Result<Place> {
        let vector_embeddings = if is_blank(row.get(COLUMN_VECTOR_EMBEDDINGS)) {
            None
        } else {
            decode_array::<f32>(row, COLUMN_VECTOR_EMBEDDINGS, "an array of numbers")?
        };
        if let Some(vector) = &vector_embeddings {
            if vector.iter().any(|v| !v.is_finite()) {
                return Err(Error::decode(
                    COLUMN_VECTOR_EMBEDDINGS,
                    "component out of 32-bit float range",
                ));
            }
        }

        Ok(Place {
            state_name: decode_text(row, COLUMN_STATE_NAME)?.unwrap_or_default(),
            city_name: decode_text(row, COLUMN_CITY_NAME)?.unwrap_or_default(),
            latitude: decode_coordinate(row, COLUMN_LATITUDE)?,
            longitude: decode_coordinate(row, COLUMN_LONGITUDE)?,
            google_maps_url: decode_text(row, COLUMN_GOOGLE_MAPS_URL)?.unwrap_or_default(),
            wikipedia_content: decode_text(row, COLUMN_WIKIPEDIA_CONTENT)?,
            unsplash_images: decode_array::<String>(
                row,
                COLUMN_UNSPLASH_IMAGES,
                "an array of strings",
            )?,
            airbnb_listings: decode_array::<Listing>(
                row,
                COLUMN_AIRBNB_LISTINGS,
                "an array of listing objects",
            )?,
            vector_embeddings,
        })
    }

    /// Decode the row at `index` of a source; decode errors carry the index
    pub fn decode_at(&self, index: usize, row: &RawRow) -> Result<Place> {
        self.decode(row).map_err(|e| e.at_row(index))
    }

    /// Encode a place as a flat row
    ///
    /// Absent optional fields are left out of the row. Listings are written
    /// with keys in `id, url, price, rating, reviews` order.
    pub fn encode(&self, place: &Place) -> Result<RawRow> {
        self.encode_as(place, RowFormat::Flat)
    }

    /// Encode a place with native nested values
    pub fn encode_columnar(&self, place: &Place) -> Result<RawRow> {
        self.encode_as(place, RowFormat::Columnar)
    }

    /// Encode a place in the given representation
    pub fn encode_as(&self, place: &Place, format: RowFormat) -> Result<RawRow> {
        let mut row = RawRow::new()
            .with(COLUMN_STATE_NAME, place.state_name.as_str())
            .with(COLUMN_CITY_NAME, place.city_name.as_str());

        if let Some(latitude) = place.latitude {
            row.insert(COLUMN_LATITUDE, encode_number(latitude, format));
        }
        if let Some(longitude) = place.longitude {
            row.insert(COLUMN_LONGITUDE, encode_number(longitude, format));
        }
        row.insert(COLUMN_GOOGLE_MAPS_URL, place.google_maps_url.as_str());
        if let Some(content) = &place.wikipedia_content {
            row.insert(COLUMN_WIKIPEDIA_CONTENT, content.as_str());
        }
        if let Some(images) = &place.unsplash_images {
            row.insert(COLUMN_UNSPLASH_IMAGES, encode_nested(images, format)?);
        }
        if let Some(listings) = &place.airbnb_listings {
            row.insert(COLUMN_AIRBNB_LISTINGS, encode_nested(listings, format)?);
        }
        if let Some(vector) = &place.vector_embeddings {
            row.insert(COLUMN_VECTOR_EMBEDDINGS, encode_nested(vector, format)?);
        }
        Ok(row)
    }
}

fn encode_number(value: f64, format: RowFormat) -> RawValue {
    match format {
        RowFormat::Flat => RawValue::Text(value.to_string()),
        RowFormat::Columnar => RawValue::Json(Value::from(value)),
    }
}

fn encode_nested<T: serde::Serialize>(value: &T, format: RowFormat) -> Result<RawValue> {
    Ok(match format {
        RowFormat::Flat => RawValue::Text(serde_json::to_string(value)?),
        RowFormat::Columnar => RawValue::Json(serde_json::to_value(value)?),
    })
}

fn is_blank(value: Option<&RawValue>) -> bool {
    match value {
        None | Some(RawValue::Json(Value::Null)) => true,
        Some(RawValue::Text(text) | RawValue::Json(Value::String(text))) => {
            text.trim().is_empty()
        }
        Some(RawValue::Json(_)) => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn decode_text(row: &RawRow, column: &str) -> Result<Option<String>> {
    match row.get(column) {
        None | Some(RawValue::Json(Value::Null)) => Ok(None),
        Some(RawValue::Text(text) | RawValue::Json(Value::String(text))) => Ok(Some(text.clone())),
        Some(RawValue::Json(other)) => Err(Error::decode(
            column,
            format!("expected text, found {}", json_kind(other)),
        )),
    }
}

fn decode_coordinate(row: &RawRow, column: &str) -> Result<Option<f64>> {
    let text = match row.get(column) {
        None | Some(RawValue::Json(Value::Null)) => return Ok(None),
        Some(RawValue::Json(Value::Number(number))) => {
            return number
                .as_f64()
                .map(Some)
                .ok_or_else(|| Error::decode(column, format!("{number} is not a float")));
        }
        Some(RawValue::Text(text) | RawValue::Json(Value::String(text))) => text.trim(),
        Some(RawValue::Json(other)) => {
            return Err(Error::decode(
                column,
                format!("expected a number, found {}", json_kind(other)),
            ));
        }
    };

    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        Ok(_) => Err(Error::decode(column, format!("'{text}' is not a finite number"))),
        Err(e) => Err(Error::decode(column, format!("'{text}' is not a number: {e}"))),
    }
}

fn decode_array<T: DeserializeOwned>(
    row: &RawRow,
    column: &str,
    shape: &str,
) -> Result<Option<Vec<T>>> {
    let parsed = match row.get(column) {
        None | Some(RawValue::Json(Value::Null)) => return Ok(None),
        Some(RawValue::Text(text) | RawValue::Json(Value::String(text))) => {
            if text.trim().is_empty() {
                return Ok(Some(Vec::new()));
            }
            serde_json::from_str::<Vec<T>>(text)
        }
        Some(RawValue::Json(value)) => Vec::<T>::deserialize(value),
    };

    parsed
        .map(Some)
        .map_err(|e| Error::decode(column, format!("expected {shape}: {e}")))
}
