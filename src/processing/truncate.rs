//! Field truncation: keep only the leading `max_fields` fields of every row.

use crate::types::{strip_line, Document, Row};

/// How a single row relates to the field cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFit {
    /// The row had more fields than the cap; the excess was dropped.
    Truncated,
    /// The row had exactly `max_fields` fields.
    Exact,
    /// The row had fewer fields than the cap and passes through unchanged.
    Short,
}

impl RowFit {
    /// Classify a row of `field_count` fields against `max_fields`.
    pub fn classify(field_count: usize, max_fields: usize) -> Self {
        match field_count.cmp(&max_fields) {
            std::cmp::Ordering::Greater => Self::Truncated,
            std::cmp::Ordering::Equal => Self::Exact,
            std::cmp::Ordering::Less => Self::Short,
        }
    }
}

/// Return the first `max_fields` fields of `row` (all of them if the row is shorter).
///
/// Short rows are never padded and never treated as an error.
pub fn truncate_row(row: &Row, max_fields: usize) -> Row {
    Row::new(row.fields.iter().take(max_fields).cloned().collect())
}

/// Truncate every row of `document`. Row count and order are preserved.
pub fn truncate_document(document: &Document, max_fields: usize) -> Document {
    document.map_rows(|row| truncate_row(row, max_fields))
}

/// Truncate a single raw line without building a [`Row`].
///
/// Produces the same text as `truncate_row(&Row::parse(line, delimiter), max_fields).render(delimiter)`
/// and also reports the line's field count before truncation.
pub fn truncate_line(line: &str, delimiter: char, max_fields: usize) -> (String, usize) {
    let trimmed = strip_line(line);
    let field_count = trimmed.split(delimiter).count();
    let out = match RowFit::classify(field_count, max_fields) {
        RowFit::Truncated => {
            let mut buf = [0u8; 4];
            let sep: &str = delimiter.encode_utf8(&mut buf);
            trimmed
                .split(delimiter)
                .take(max_fields)
                .collect::<Vec<_>>()
                .join(sep)
        }
        RowFit::Exact | RowFit::Short => trimmed.to_owned(),
    };
    (out, field_count)
}
