use std::io::{self, BufRead};

use log::debug;

use super::record::TagRecord;

/// Reads tag records line by line, skipping lines that do not form a valid record
pub struct TagReader<R> {
    inner: R,
    buf: Vec<u8>,
    line_num: usize,
}

impl<R: BufRead> TagReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, buf: Vec::new(), line_num: 0 }
    }

    /// Read the next valid record
    ///
    /// Returns `Ok(None)` once the input is exhausted. Invalid lines, including lines that
    /// are not valid UTF-8, are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only when the underlying reader fails.
    pub fn read_record(&mut self) -> io::Result<Option<TagRecord>> {
        loop {
            self.buf.clear();
            if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_num += 1;

            let bytes = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf[..]);
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);

            let Ok(line) = std::str::from_utf8(bytes) else {
                debug!("Skipping tag line {} with invalid UTF-8", self.line_num);
                continue;
            };

            match TagRecord::parse(line) {
                Some(record) => return Ok(Some(record)),
                None => {
                    if !line.trim().is_empty() {
                        debug!("Skipping invalid tag line {}", self.line_num);
                    }
                }
            }
        }
    }

    /// Read every remaining valid record
    pub fn read_all(&mut self) -> io::Result<Vec<TagRecord>> {
        let mut records = Vec::new();
        while let Some(record) = self.read_record()? {
            records.push(record);
        }
        Ok(records)
    }
}

impl<R: BufRead> Iterator for TagReader<R> {
    type Item = io::Result<TagRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use super::*;

    #[test]
    fn test_read_all_skips_invalid_lines() {
        let input = "\nnot a tag\nfoo\tfoo.md\t1;\"\n\nbar\tbar.md\n baz\tbaz.md\t2\n";
        let records = TagReader::new(Cursor::new(input)).read_all().unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["foo", " baz"]);
    }

    #[test]
    fn test_read_record_signals_end() {
        let mut reader = TagReader::new(Cursor::new("foo\tfoo.md\t1\n"));
        assert!(reader.read_record().unwrap().is_some());
        assert!(reader.read_record().unwrap().is_none());
        assert!(reader.read_record().unwrap().is_none());
    }

    #[test]
    fn test_read_crlf_line_endings() {
        let input = "foo\tfoo.md\t1;\"\tkind:title\r\nbar\tbar.md\t2;\"\r\n";
        let records = TagReader::new(Cursor::new(input)).read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind(), "title");
        assert_eq!(records[1].address, "2");
    }

    #[test]
    fn test_read_skips_invalid_utf8_line() {
        let mut input = b"foo\tfoo.md\t1;\"\n".to_vec();
        input.extend_from_slice(b"bad\xff\tbad.md\t1;\"\n");
        input.extend_from_slice(b"bar\tbar.md\t2;\"\n");

        let records = TagReader::new(Cursor::new(input)).read_all().unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["foo", "bar"]);
    }

    #[test]
    fn test_iterator_yields_records() {
        let input = "a\ta.md\t1\nb\tb.md\t2\n";
        let names: Vec<String> =
            TagReader::new(Cursor::new(input)).map(|r| r.unwrap().name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_io_error_is_propagated() {
        let mut reader = TagReader::new(io::BufReader::new(FailingReader));
        let err = reader.read_all().unwrap_err();
        assert_eq!(err.to_string(), "disk on fire");
    }
}
