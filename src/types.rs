//! Core data model: a [`Document`] is an ordered list of [`Row`]s, each an ordered list of text
//! fields split out of one input line.

use crate::ingestion::lines::universal_lines;

/// Characters removed from both ends of a line before splitting.
///
/// Unicode whitespace plus the information separators U+001C..U+001F, which are treated as
/// whitespace as well.
pub fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip [`is_strip_char`] characters from both ends of `line`.
pub fn strip_line(line: &str) -> &str {
    line.trim_matches(is_strip_char)
}

/// One line of input, decomposed into fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    /// Ordered field values.
    pub fields: Vec<String>,
}

impl Row {
    /// Create a row from fields.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Parse one line into a row.
    ///
    /// Leading/trailing whitespace (see [`is_strip_char`]) is stripped once, before
    /// splitting. No quoting rules apply: every `delimiter` is a field boundary. An empty line
    /// yields a single empty field.
    pub fn parse(line: &str, delimiter: char) -> Self {
        Self {
            fields: strip_line(line).split(delimiter).map(str::to_owned).collect(),
        }
    }

    /// Number of fields in the row.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Join the fields back into one line (without terminator).
    pub fn render(&self, delimiter: char) -> String {
        let mut buf = [0u8; 4];
        self.fields.join(&*delimiter.encode_utf8(&mut buf))
    }
}

/// In-memory document: rows in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Rows, in source order.
    pub rows: Vec<Row>,
}

impl Document {
    /// Create a document from rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Parse every line of `text` into a row.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. A trailing terminator does not produce an extra
    /// row, and empty text yields an empty document.
    pub fn parse(text: &str, delimiter: char) -> Self {
        Self {
            rows: universal_lines(text).map(|line| Row::parse(line, delimiter)).collect(),
        }
    }

    /// Number of rows in the document.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Create a new document by applying `mapper` to every row.
    ///
    /// Row count and row order are always preserved.
    pub fn map_rows<F>(&self, mapper: F) -> Self
    where
        F: FnMut(&Row) -> Row,
    {
        Self {
            rows: self.rows.iter().map(mapper).collect(),
        }
    }
}
