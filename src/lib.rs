//! `row-truncator` rewrites a delimiter-separated text file so that every line keeps at most its
//! first `N` fields.
//!
//! The primary entrypoint is [`ingestion::truncate_file`], configured through
//! [`ingestion::TruncateOptions`]. The defaults reproduce the product-database cleanup: `;` as the
//! delimiter and a cap of 17 fields.
//!
//! ## Rules
//!
//! - Every line is a row, a header line included. Output row count equals input row count.
//! - Each line is whitespace-stripped once, then split on the delimiter. No quoting is recognized.
//! - Only the leading `N` fields are kept, in order. Shorter rows pass through unchanged.
//! - Each output row is joined with the delimiter and terminated by a single `\n`.
//! - Any I/O error ends the run with a [`TruncateError`].
//!
//! ## Quick example
//!
//! ```no_run
//! use row_truncator::ingestion::{truncate_file, TruncateOptions};
//!
//! # fn main() -> Result<(), row_truncator::TruncateError> {
//! let stats = truncate_file("productDatabase.csv", "productDatabase_clean.csv", &TruncateOptions::default())?;
//! println!("rows={}", stats.rows);
//! # Ok(())
//! # }
//! ```
//!
//! ## In-memory example
//!
//! ```rust
//! use row_truncator::processing::truncate_document;
//! use row_truncator::types::Document;
//!
//! let line: String = (1..=20).map(|i| format!("v{i}")).collect::<Vec<_>>().join(";");
//! let doc = Document::parse(&format!("A;B;C;D\n{line}\n"), ';');
//! let out = truncate_document(&doc, 17);
//!
//! assert_eq!(out.rows[0].render(';'), "A;B;C;D");
//! assert_eq!(out.rows[1].field_count(), 17);
//! assert_eq!(out.rows[1].fields.last().map(String::as_str), Some("v17"));
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: reading, the unified entrypoint, options and observers
//! - [`processing`]: in-memory truncation
//! - [`output`]: writing documents back out
//! - [`types`]: row and document types
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod output;
pub mod processing;
pub mod types;

pub use error::{TruncateError, TruncateResult};
