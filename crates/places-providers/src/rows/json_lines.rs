//! JSON Lines row source and sink
//!
//! Columnar rows: one JSON object per line, numbers and nested fields as
//! native JSON values. Blank lines are skipped but still counted toward the
//! line numbers in decode errors.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;

use places_domain::constants::COLUMNS;
use places_domain::error::{Error, Result};
use places_domain::ports::providers::RowSink;
use places_domain::value_objects::{RawRow, RawValue};
use serde_json::{Map, Value};

/// Row source over newline-delimited JSON objects
///
/// Blank lines yield nothing, so the ordinal a consumer assigns to a row can
/// trail its line in the file. Decode errors name the 1-based physical line.
pub struct JsonLinesRowSource<R: BufRead> {
    lines: Lines<R>,
    line: usize,
    failed: bool,
}

impl JsonLinesRowSource<BufReader<File>> {
    /// Open a JSON Lines file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::io_with_source(format!("failed to open {}", path.display()), e)
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonLinesRowSource<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            failed: false,
        }
    }

    /// 1-based number of the last physical line read, 0 before the first
    pub fn line_number(&self) -> usize {
        self.line
    }
}

fn parse_line(number: usize, line: &str) -> Result<RawRow> {
    let value = serde_json::from_str::<Value>(line)
        .map_err(|e| Error::decode("<row>", format!("line {number}: {e}")))?;
    match value {
        Value::Object(fields) => Ok(fields
            .into_iter()
            .map(|(column, value)| (column, RawValue::Json(value)))
            .collect()),
        other => Err(Error::decode(
            "<row>",
            format!("line {number}: expected a JSON object, found {other}"),
        )),
    }
}

impl<R: BufRead> Iterator for JsonLinesRowSource<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let next = self.lines.next()?;
            self.line += 1;
            match next {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => return Some(parse_line(self.line, &line)),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(Error::io_with_source("failed to read JSON line", e)));
                }
            }
        }
    }
}

/// Row sink writing one JSON object per line
pub struct JsonLinesRowSink<W: Write> {
    writer: BufWriter<W>,
}

impl JsonLinesRowSink<File> {
    /// Create or truncate a JSON Lines file
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            Error::io_with_source(format!("failed to create {}", path.display()), e)
        })?;
        Ok(Self::new(file))
    }
}

impl<W: Write> JsonLinesRowSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Flush and return the underlying writer
    pub fn into_inner(mut self) -> Result<W> {
        self.finish()?;
        self.writer
            .into_inner()
            .map_err(|e| Error::io(format!("failed to flush JSON Lines writer: {}", e.error())))
    }
}

impl<W: Write> RowSink for JsonLinesRowSink<W> {
    fn write_row(&mut self, row: &RawRow) -> Result<()> {
        let mut object = Map::new();
        for column in COLUMNS {
            if let Some(value) = row.get(column) {
                let value = match value {
                    RawValue::Text(text) => Value::String(text.clone()),
                    RawValue::Json(value) => value.clone(),
                };
                object.insert(column.to_string(), value);
            }
        }
        serde_json::to_writer(&mut self.writer, &object)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
