//! Row Source and Sink Implementations
//!
//! | Provider | Format | Description |
//! |----------|--------|-------------|
//! | CsvRowSource / CsvRowSink | Flat | Text cells, nested fields as JSON text |
//! | JsonLinesRowSource / JsonLinesRowSink | Columnar | One JSON object per line |

#[cfg(feature = "rows-csv")]
pub mod csv;
#[cfg(feature = "rows-jsonl")]
pub mod json_lines;

#[cfg(feature = "rows-csv")]
pub use self::csv::{CsvOptions, CsvRowSink, CsvRowSource};
#[cfg(feature = "rows-jsonl")]
pub use self::json_lines::{JsonLinesRowSink, JsonLinesRowSource};
