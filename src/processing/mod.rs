//! In-memory document transformations.
//!
//! The processing layer operates on [`crate::types::Document`] values produced by ingestion.
//!
//! Currently implemented:
//!
//! - [`truncate_document()`] / [`truncate_row()`]: keep the leading `N` fields of every row
//! - [`truncate_line()`]: the same transform on a single raw line (used by streaming runs)
//!
//! ## Example: cap every row at 3 fields
//!
//! ```rust
//! use row_truncator::processing::truncate_document;
//! use row_truncator::types::Document;
//!
//! let doc = Document::parse("a;b;c;d;e\nx;y\n\n", ';');
//! let out = truncate_document(&doc, 3);
//!
//! let lines: Vec<String> = out.rows.iter().map(|r| r.render(';')).collect();
//! assert_eq!(lines, vec!["a;b;c", "x;y", ""]);
//! ```

pub mod truncate;

pub use truncate::{truncate_document, truncate_line, truncate_row, RowFit};
