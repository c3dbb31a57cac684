//! Reading, the unified truncation entrypoint, and run observability.
//!
//! Most callers should use [`truncate_file`] (from [`unified`]) which:
//!
//! - reads the source as UTF-8 lines (buffered or streaming, see [`WriteMode`])
//! - keeps the leading `max_fields` fields of every line
//! - writes the destination and returns [`TruncationStats`]
//! - optionally reports the run to a [`TruncationObserver`]
//!
//! Line-level reading (and the shared `\n` / `\r\n` / `\r` line splitter) is available under
//! [`lines`].

pub mod lines;
pub mod observability;
pub mod unified;

pub use lines::{read_document_from_path, read_document_from_reader, universal_lines, LineReader};
pub use observability::{StdErrObserver, TruncationContext, TruncationObserver, TruncationStats};
pub use unified::{
    truncate_file, TruncateOptions, TruncateRequest, WriteMode, DEFAULT_DELIMITER, DEFAULT_DESTINATION,
    DEFAULT_MAX_FIELDS, DEFAULT_SOURCE,
};
