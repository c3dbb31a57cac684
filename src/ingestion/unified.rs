//! Unified truncation entrypoint.
//!
//! Most callers should use [`truncate_file`], which reads a delimiter-separated file, keeps the
//! leading [`TruncateOptions::max_fields`] fields of every line and writes the result to a new
//! file.
//!
//! - [`WriteMode::Buffered`] (default) reads the whole source before creating the destination.
//! - [`WriteMode::Streaming`] transforms line by line with constant memory.
//! - If a [`super::observability::TruncationObserver`] is provided, the start and outcome of
//!   the run are reported to it.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{TruncateError, TruncateResult};
use crate::output::write_document_to_path;
use crate::processing::{truncate_document, truncate_line};

use super::lines::{read_document_from_path, LineReader};
use super::observability::{TruncationContext, TruncationObserver, TruncationStats};

/// Source file used when none is given.
pub const DEFAULT_SOURCE: &str = "productDatabase.csv";
/// Destination file used when none is given.
pub const DEFAULT_DESTINATION: &str = "productDatabase_clean.csv";
/// Field delimiter used when none is given.
pub const DEFAULT_DELIMITER: char = ';';
/// Field cap used when none is given.
pub const DEFAULT_MAX_FIELDS: usize = 17;

/// How rows travel from source to destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Read every row into memory, then write them all.
    #[default]
    Buffered,
    /// Read, truncate and write one line at a time.
    Streaming,
}

/// Options controlling a truncation run.
///
/// Use [`Default`] for the standard `;` / 17-field cleanup.
#[derive(Clone)]
pub struct TruncateOptions {
    /// Field delimiter (no quoting or escaping is recognized).
    pub delimiter: char,
    /// Maximum number of leading fields kept per row.
    pub max_fields: usize,
    /// Buffered or streaming transfer.
    pub mode: WriteMode,
    /// Optional observer for run reporting.
    pub observer: Option<Arc<dyn TruncationObserver>>,
}

impl fmt::Debug for TruncateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TruncateOptions")
            .field("delimiter", &self.delimiter)
            .field("max_fields", &self.max_fields)
            .field("mode", &self.mode)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            max_fields: DEFAULT_MAX_FIELDS,
            mode: WriteMode::default(),
            observer: None,
        }
    }
}

/// Truncate every line of `source` to its first `options.max_fields` fields and write the result
/// to `destination` (created or overwritten).
///
/// Output row count always equals input row count; rows with fewer fields than the cap pass
/// through unchanged. Any I/O error ends the run; a partially written destination is left as is.
///
/// When an observer is configured, this function reports:
///
/// - `on_start` before the source is opened
/// - `on_success` on success, with [`TruncationStats`]
/// - `on_failure` with the error that ended the run
///
/// # Examples
///
/// ```no_run
/// use row_truncator::ingestion::{truncate_file, TruncateOptions};
///
/// # fn main() -> Result<(), row_truncator::TruncateError> {
/// let stats = truncate_file(
///     "productDatabase.csv",
///     "productDatabase_clean.csv",
///     &TruncateOptions::default(),
/// )?;
/// println!("rows={} truncated={}", stats.rows, stats.truncated_rows);
/// # Ok(())
/// # }
/// ```
///
/// ## Streaming with stderr logging
///
/// ```no_run
/// use std::sync::Arc;
///
/// use row_truncator::ingestion::{truncate_file, StdErrObserver, TruncateOptions, WriteMode};
///
/// # fn main() -> Result<(), row_truncator::TruncateError> {
/// let opts = TruncateOptions {
///     max_fields: 5,
///     mode: WriteMode::Streaming,
///     observer: Some(Arc::new(StdErrObserver)),
///     ..Default::default()
/// };
/// truncate_file("big.csv", "big_clean.csv", &opts)?;
/// # Ok(())
/// # }
/// ```
pub fn truncate_file(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    options: &TruncateOptions,
) -> TruncateResult<TruncationStats> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    // Streaming into the file being read would truncate it before it is consumed.
    let mode = match options.mode {
        WriteMode::Streaming if same_file(source, destination) => WriteMode::Buffered,
        m => m,
    };

    let ctx = TruncationContext {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        delimiter: options.delimiter,
        max_fields: options.max_fields,
        mode,
    };

    if let Some(obs) = options.observer.as_ref() {
        obs.on_start(&ctx);
    }

    let result = match mode {
        WriteMode::Buffered => truncate_buffered(source, destination, options.delimiter, options.max_fields),
        WriteMode::Streaming => truncate_streaming(source, destination, options.delimiter, options.max_fields),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(stats) => obs.on_success(&ctx, *stats),
            Err(e) => obs.on_failure(&ctx, e),
        }
    }

    result
}

fn truncate_buffered(
    source: &Path,
    destination: &Path,
    delimiter: char,
    max_fields: usize,
) -> TruncateResult<TruncationStats> {
    let document = read_document_from_path(source, delimiter)?;

    let mut stats = TruncationStats::default();
    for row in &document.rows {
        stats.record(row.field_count(), max_fields);
    }

    let cleaned = truncate_document(&document, max_fields);
    write_document_to_path(&cleaned, delimiter, destination)?;
    Ok(stats)
}

fn truncate_streaming(
    source: &Path,
    destination: &Path,
    delimiter: char,
    max_fields: usize,
) -> TruncateResult<TruncationStats> {
    let input = File::open(source).map_err(|e| TruncateError::read(source, e))?;
    let reader = BufReader::new(input);
    let output = File::create(destination).map_err(|e| TruncateError::write(destination, e))?;
    let mut writer = BufWriter::new(output);

    let mut stats = TruncationStats::default();
    for line in LineReader::new(reader) {
        let line = line.map_err(|e| TruncateError::read(source, e))?;
        let (cleaned, field_count) = truncate_line(&line, delimiter, max_fields);
        stats.record(field_count, max_fields);
        writeln!(writer, "{cleaned}").map_err(|e| TruncateError::write(destination, e))?;
    }
    writer.flush().map_err(|e| TruncateError::write(destination, e))?;
    Ok(stats)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// An owned truncation job: source, destination and options.
///
/// [`Default`] gives the fixed `productDatabase.csv` → `productDatabase_clean.csv` cleanup.
#[derive(Clone)]
pub struct TruncateRequest {
    /// Path to the input file.
    pub source: PathBuf,
    /// Path to the output file.
    pub destination: PathBuf,
    /// Options controlling truncation.
    pub options: TruncateOptions,
}

impl fmt::Debug for TruncateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TruncateRequest")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("options", &self.options)
            .finish()
    }
}

impl Default for TruncateRequest {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            options: TruncateOptions::default(),
        }
    }
}

impl TruncateRequest {
    /// Execute the request by calling [`truncate_file`].
    pub fn run(&self) -> TruncateResult<TruncationStats> {
        truncate_file(&self.source, &self.destination, &self.options)
    }

    /// Human-readable completion notice naming the destination.
    pub fn completion_message(&self) -> String {
        format!("Clean CSV written: {}", self.destination.display())
    }
}
