//! Run reporting.
//!
//! A [`TruncationObserver`] hears about the start of a run and its outcome. Every failure is an
//! I/O error, so there is no severity ranking: an observer either sees the [`TruncationStats`]
//! of a finished run or the error that ended it.

use std::fmt;
use std::path::PathBuf;

use crate::error::TruncateError;
use crate::processing::RowFit;

use super::unified::WriteMode;

/// Context about a truncation run.
#[derive(Debug, Clone)]
pub struct TruncationContext {
    /// Source file.
    pub source: PathBuf,
    /// Destination file.
    pub destination: PathBuf,
    /// Field delimiter.
    pub delimiter: char,
    /// Field cap.
    pub max_fields: usize,
    /// Mode the run actually used (streaming may fall back to buffered).
    pub mode: WriteMode,
}

/// What a successful run did to the rows it wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TruncationStats {
    /// Rows written (always equal to rows read).
    pub rows: usize,
    /// Rows that had more fields than the cap.
    pub truncated_rows: usize,
    /// Rows that had fewer fields than the cap and passed through unchanged.
    pub short_rows: usize,
    /// Largest field count seen on any source row.
    pub widest_row: usize,
    /// 1-based line number of the first row that lost fields.
    pub first_truncated_line: Option<usize>,
}

impl TruncationStats {
    /// Account for one source row of `field_count` fields.
    pub(crate) fn record(&mut self, field_count: usize, max_fields: usize) {
        self.rows += 1;
        self.widest_row = self.widest_row.max(field_count);
        match RowFit::classify(field_count, max_fields) {
            RowFit::Truncated => {
                self.truncated_rows += 1;
                if self.first_truncated_line.is_none() {
                    self.first_truncated_line = Some(self.rows);
                }
            }
            RowFit::Short => self.short_rows += 1,
            RowFit::Exact => {}
        }
    }
}

impl fmt::Display for TruncationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows, {} truncated, {} short",
            self.rows, self.truncated_rows, self.short_rows
        )?;
        if let Some(line) = self.first_truncated_line {
            write!(f, " (widest row {} fields, first cut at line {line})", self.widest_row)?;
        }
        Ok(())
    }
}

/// Observer interface for truncation runs.
pub trait TruncationObserver: Send + Sync {
    /// Called before the source is opened.
    fn on_start(&self, _ctx: &TruncationContext) {}

    /// Called once the destination has been written and flushed.
    fn on_success(&self, _ctx: &TruncationContext, _stats: TruncationStats) {}

    /// Called when the run ends with an error.
    fn on_failure(&self, _ctx: &TruncationContext, _error: &TruncateError) {}
}

/// Writes a short run summary to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl TruncationObserver for StdErrObserver {
    fn on_start(&self, ctx: &TruncationContext) {
        eprintln!(
            "truncating {} -> {} (keep {} fields split on {:?}, {:?})",
            ctx.source.display(),
            ctx.destination.display(),
            ctx.max_fields,
            ctx.delimiter,
            ctx.mode
        );
    }

    fn on_success(&self, ctx: &TruncationContext, stats: TruncationStats) {
        eprintln!("{}: {stats}", ctx.destination.display());
    }

    fn on_failure(&self, ctx: &TruncationContext, error: &TruncateError) {
        eprintln!("{}: failed: {error}", ctx.source.display());
    }
}
