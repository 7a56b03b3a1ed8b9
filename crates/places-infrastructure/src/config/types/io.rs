//! Row file configuration types

use crate::constants::DEFAULT_CSV_DELIMITER;
use places_domain::error::{Error, Result};
use places_providers::rows::CsvOptions;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Row file configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IoConfig {
    /// CSV field delimiter, a single ASCII character
    pub csv_delimiter: char,

    /// Whether CSV input starts with a header record
    pub csv_has_headers: bool,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            csv_delimiter: DEFAULT_CSV_DELIMITER,
            csv_has_headers: true,
        }
    }
}

impl IoConfig {
    /// CSV dialect for the row providers
    pub fn csv_options(&self) -> Result<CsvOptions> {
        let delimiter = u8::try_from(self.csv_delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                Error::config(format!(
                    "CSV delimiter '{}' must be a single ASCII character",
                    self.csv_delimiter
                ))
            })?;
        Ok(CsvOptions {
            delimiter,
            has_headers: self.csv_has_headers,
        })
    }
}
