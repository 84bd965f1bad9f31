use std::io::{self, BufWriter, Write};

use super::record::TagRecord;

/// Writes tag records as tag lines
///
/// Output is buffered. Call [`TagWriter::flush`] (or use [`TagWriter::write_all`], which
/// flushes) to make sure every record reaches the underlying writer.
pub struct TagWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> TagWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner: BufWriter::new(inner) }
    }

    /// Write a single record followed by a newline
    pub fn write_record(&mut self, record: &TagRecord) -> io::Result<()> {
        writeln!(self.inner, "{}", record)
    }

    /// Write every record, then flush
    ///
    /// Stops at the first error. The writer should not be used after an error.
    pub fn write_all<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a TagRecord>,
    ) -> io::Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
