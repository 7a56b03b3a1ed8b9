//! CSV row source and sink
//!
//! Flat rows: every cell is text, nested fields are JSON text. Cells are
//! read as-is, so an empty cell is a present, empty column; only columns the
//! file does not have are absent.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use places_domain::constants::COLUMNS;
use places_domain::error::{Error, Result};
use places_domain::ports::providers::RowSink;
use places_domain::value_objects::{RawRow, RawValue};

/// CSV dialect options
#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: u8,
    /// Whether the first record names the columns; when false the canonical
    /// column order is assumed
    pub has_headers: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }
}

/// Row source over a CSV reader
pub struct CsvRowSource<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    headers: Vec<String>,
    failed: bool,
}

impl CsvRowSource<File> {
    /// Open a CSV file
    pub fn from_path(path: impl AsRef<Path>, options: CsvOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::io_with_source(format!("failed to open {}", path.display()), e)
        })?;
        Self::new(file, options)
    }
}

impl<R: Read> CsvRowSource<R> {
    /// Wrap a reader, consuming the header record when there is one
    pub fn new(reader: R, options: CsvOptions) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(options.has_headers)
            .flexible(true)
            .from_reader(reader);

        let headers = if options.has_headers {
            reader
                .headers()
                .map_err(|e| Error::io_with_source("failed to read CSV header", e))?
                .iter()
                .map(|h| h.trim().to_string())
                .collect()
        } else {
            COLUMNS.iter().map(ToString::to_string).collect()
        };

        Ok(Self {
            records: reader.into_records(),
            headers,
            failed: false,
        })
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for CsvRowSource<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => {
                // The underlying reader is broken; nothing after this is readable
                if e.is_io_error() {
                    self.failed = true;
                }
                return Some(Err(Error::io_with_source("failed to read CSV record", e)));
            }
        };

        let row = self
            .headers
            .iter()
            .zip(record.iter())
            .map(|(column, cell)| (column.clone(), RawValue::Text(cell.to_string())))
            .collect();
        Some(Ok(row))
    }
}

/// Row sink writing CSV in canonical column order
///
/// The header row is written before the first record, or on `finish` when
/// no record was written. Absent columns are written as empty cells.
pub struct CsvRowSink<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

impl CsvRowSink<File> {
    /// Create or truncate a CSV file
    pub fn create(path: impl AsRef<Path>, options: CsvOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            Error::io_with_source(format!("failed to create {}", path.display()), e)
        })?;
        Ok(Self::new(file, options))
    }
}

impl<W: Write> CsvRowSink<W> {
    /// Wrap a writer
    pub fn new(writer: W, options: CsvOptions) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(false)
            .from_writer(writer);
        Self {
            writer,
            header_written: !options.has_headers,
        }
    }

    /// Flush and return the underlying writer
    pub fn into_inner(mut self) -> Result<W> {
        self.finish()?;
        self.writer
            .into_inner()
            .map_err(|e| Error::io(format!("failed to flush CSV writer: {}", e.error())))
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            self.writer
                .write_record(COLUMNS)
                .map_err(|e| Error::io_with_source("failed to write CSV header", e))?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write> RowSink for CsvRowSink<W> {
    fn write_row(&mut self, row: &RawRow) -> Result<()> {
        self.write_header()?;
        let cells = COLUMNS
            .iter()
            .map(|column| row.get(column).map(RawValue::to_text).unwrap_or_default());
        self.writer
            .write_record(cells)
            .map_err(|e| Error::io_with_source("failed to write CSV record", e))
    }

    fn finish(&mut self) -> Result<()> {
        self.write_header()?;
        self.writer
            .flush()
            .map_err(|e| Error::io_with_source("failed to flush CSV output", e))
    }
}
