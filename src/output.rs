//! Writing a [`Document`] back out as delimiter-separated text.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{TruncateError, TruncateResult};
use crate::types::Document;

/// Write every row of `document`, joined with `delimiter` and followed by `\n`, in order.
///
/// The writer is flushed before returning.
pub fn write_document_to_writer<W: Write>(
    document: &Document,
    delimiter: char,
    writer: &mut W,
) -> TruncateResult<()> {
    for row in &document.rows {
        writeln!(writer, "{}", row.render(delimiter))?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or overwrite) `path` and write `document` to it.
///
/// There is no rollback: if a write fails midway the destination keeps whatever was flushed.
pub fn write_document_to_path(
    document: &Document,
    delimiter: char,
    path: impl AsRef<Path>,
) -> TruncateResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| TruncateError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    write_document_to_writer(document, delimiter, &mut writer).map_err(|e| match e {
        TruncateError::Io(source) => TruncateError::write(path, source),
        other => other,
    })
}
