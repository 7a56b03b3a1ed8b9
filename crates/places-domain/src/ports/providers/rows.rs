use crate::error::Result;
use crate::value_objects::RawRow;

/// Row Source Interface
///
/// A lazy, finite sequence of raw rows. A failed item stands for one
/// unreadable row; the source keeps yielding the rows after it.
pub trait RowSource: Iterator<Item = Result<RawRow>> {}

impl<T> RowSource for T where T: Iterator<Item = Result<RawRow>> {}

/// Row Sink Interface
///
/// Accepts encoded rows one at a time.
pub trait RowSink {
    /// Write one row
    fn write_row(&mut self, row: &RawRow) -> Result<()>;

    /// Flush buffered rows
    fn finish(&mut self) -> Result<()>;
}
