//! Loading and validation of logged IR differential-reflectance series.
//!
//! The logger writes CSV rows with an `ms` timestamp and a `diff` value
//! (lit minus dark reading). Rows may arrive out of order; the loader sorts
//! them stably by timestamp. Any missing or non-numeric cell is a fatal
//! load error that names the offending row and column, so the detection
//! code downstream never has to branch on NaN or absent values.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use rolling_stats::Stats;

use crate::error::{GlintError, Result};

/// Required timestamp column, in milliseconds.
pub const TIME_COLUMN: &str = "ms";

/// Required differential-reflectance column.
pub const VALUE_COLUMN: &str = "diff";

/// One reading from the IR log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Capture time in milliseconds
    pub t_ms: f64,
    /// Lit-minus-dark reflectance difference
    pub value: f64,
}

/// Inter-sample spacing summary, for informational logging only.
#[derive(Debug, Clone, Copy)]
pub struct IntervalStats {
    pub count: usize,
    pub mean_ms: f64,
    pub std_dev_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Load a series from a CSV file and sort it ascending by timestamp.
pub fn load_series(path: &Path) -> Result<Vec<Sample>> {
    // flexible() lets short rows through the parser so they surface as a
    // MissingField error naming the row and column.
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    read_series(reader)
}

/// Load a series from any CSV reader (file, buffer, test string).
pub fn read_series<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Sample>> {
    let headers = reader.headers()?.clone();
    let ms_idx = column_index(&headers, TIME_COLUMN)?;
    let diff_idx = column_index(&headers, VALUE_COLUMN)?;

    let mut samples = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // 1-based data row, excluding the header line
        let row = i + 1;
        let t_ms = parse_cell(&record, ms_idx, TIME_COLUMN, row)?;
        let value = parse_cell(&record, diff_idx, VALUE_COLUMN, row)?;
        samples.push(Sample { t_ms, value });
    }

    // Stable, so duplicate timestamps keep their file order.
    samples.sort_by(|a, b| a.t_ms.total_cmp(&b.t_ms));
    Ok(samples)
}

fn column_index(headers: &StringRecord, column: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(GlintError::MissingColumn { column })
}

fn parse_cell(
    record: &StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<f64> {
    let raw = record
        .get(idx)
        .filter(|cell| !cell.is_empty())
        .ok_or(GlintError::MissingField { column, row })?;

    let value: f64 = raw.parse().map_err(|_| GlintError::InvalidValue {
        column,
        row,
        value: raw.to_string(),
    })?;

    // NaN and infinities would poison every downstream comparison.
    if !value.is_finite() {
        return Err(GlintError::InvalidValue {
            column,
            row,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Summarize the spacing between consecutive samples.
///
/// Non-positive gaps (duplicate timestamps) are skipped, matching how the
/// logger's own interval report ignores them. Returns `None` when fewer
/// than two distinct timestamps exist.
pub fn interval_stats(samples: &[Sample]) -> Option<IntervalStats> {
    let mut stats: Stats<f64> = Stats::new();
    for pair in samples.windows(2) {
        let dt = pair[1].t_ms - pair[0].t_ms;
        if dt > 0.0 {
            stats.update(dt);
        }
    }
    if stats.count == 0 {
        return None;
    }
    Some(IntervalStats {
        count: stats.count,
        mean_ms: stats.mean,
        std_dev_ms: stats.std_dev,
        min_ms: stats.min,
        max_ms: stats.max,
    })
}
