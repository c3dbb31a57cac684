//! Line-oriented reading of delimiter-separated text.
//!
//! `\n`, `\r\n` and a lone `\r` all end a line. A final line without a terminator is still a
//! line; text that ends right after a terminator does not produce an extra empty line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{TruncateError, TruncateResult};
use crate::types::{Document, Row};

/// Iterator over the lines of an in-memory string, terminators removed.
#[derive(Debug, Clone)]
pub struct UniversalLines<'a> {
    rest: &'a str,
}

/// Split `text` into lines on `\n`, `\r\n` or `\r`.
pub fn universal_lines(text: &str) -> UniversalLines<'_> {
    UniversalLines { rest: text }
}

impl<'a> Iterator for UniversalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let line = match self.rest.find(['\r', '\n']) {
            Some(i) => {
                let skip = if self.rest[i..].starts_with("\r\n") { 2 } else { 1 };
                let line = &self.rest[..i];
                self.rest = &self.rest[i + skip..];
                line
            }
            None => std::mem::take(&mut self.rest),
        };
        Some(line)
    }
}

/// Reads lines one at a time from a [`BufRead`], with the same line-ending rules as
/// [`universal_lines`].
///
/// The reader pulls `\n`-terminated chunks, so a `\r\n` pair never straddles two reads and each
/// chunk can be split on its own. Invalid UTF-8 is an [`io::ErrorKind::InvalidData`] error.
pub struct LineReader<R> {
    reader: R,
    chunk: Vec<u8>,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            chunk: Vec::new(),
            pending: Vec::new().into_iter(),
        }
    }

    fn fill(&mut self) -> io::Result<bool> {
        self.chunk.clear();
        if self.reader.read_until(b'\n', &mut self.chunk)? == 0 {
            return Ok(false);
        }
        let text = std::str::from_utf8(&self.chunk)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pending = universal_lines(text)
            .map(str::to_owned)
            .collect::<Vec<_>>()
            .into_iter();
        Ok(true)
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.next() {
                return Some(Ok(line));
            }
            match self.fill() {
                Ok(true) => continue,
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Read a UTF-8 file into an in-memory [`Document`].
///
/// Rules:
///
/// - every line is a row, including a header line if there is one;
/// - each line is whitespace-stripped once, then split on `delimiter`;
/// - a missing/unreadable file or invalid UTF-8 is reported as [`TruncateError::Read`].
pub fn read_document_from_path(path: impl AsRef<Path>, delimiter: char) -> TruncateResult<Document> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TruncateError::read(path, e))?;
    read_document_from_reader(BufReader::new(file), delimiter).map_err(|e| match e {
        TruncateError::Io(source) => TruncateError::read(path, source),
        other => other,
    })
}

/// Read a [`Document`] from an already-open reader.
pub fn read_document_from_reader<R: BufRead>(reader: R, delimiter: char) -> TruncateResult<Document> {
    let mut rows = Vec::new();
    for line in LineReader::new(reader) {
        rows.push(Row::parse(&line?, delimiter));
    }
    Ok(Document::new(rows))
}
