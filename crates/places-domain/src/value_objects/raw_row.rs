//! Raw row value objects
//!
//! The flat, undecoded shape of a record as produced by a row source and
//! consumed by a row sink.

use serde_json::Value;
use std::collections::HashMap;

/// Value Object: Raw Field Value
///
/// Flat text sources (CSV) yield [`RawValue::Text`], with nested fields
/// carried as JSON text. Columnar sources (JSON Lines) yield
/// [`RawValue::Json`] with nested fields as native arrays and objects.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Plain text cell
    Text(String),
    /// Native structured value
    Json(Value),
}

impl RawValue {
    /// Text form of the value; native values are rendered as JSON text
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Json(Value::String(text)) => text.clone(),
            Self::Json(Value::Null) => String::new(),
            Self::Json(value) => value.to_string(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// Value Object: Raw Row
///
/// Mapping of column name to raw value. Columns missing from the mapping are
/// absent, which the codec distinguishes from present-but-empty cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    fields: HashMap<String, RawValue>,
}

impl RawRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value, builder style
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a column value
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Get a column value
    pub fn get(&self, column: &str) -> Option<&RawValue> {
        self.fields.get(column)
    }

    /// Whether the column is present
    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Number of present columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no column is present
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over present columns in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, RawValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
