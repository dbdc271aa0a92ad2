use csv::QuoteStyle;
use std::{fs::OpenOptions, path::Path};

use crate::model::{batch::BatchError, filter::FilteredRow};

/// appends rows to the CSV file at `path`, creating it if needed. the header is
/// written only when the file is missing or empty, so repeated runs grow a single
/// table. nothing is written for an empty row set, not even the header.
///
/// # Result
/// the number of data rows written, excluding the header.
pub fn append_rows(path: &Path, rows: &[FilteredRow]) -> Result<usize, BatchError> {
    if rows.is_empty() {
        return Ok(0);
    }
    let has_content = std::fs::metadata(path)
        .map(|m| m.len() > 0)
        .unwrap_or(false);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BatchError::persistence(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(file);

    if !has_content {
        writer
            .write_record(FilteredRow::HEADER)
            .map_err(|e| BatchError::persistence(path, e.into()))?;
    }
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| BatchError::persistence(path, e.into()))?;
    }
    writer
        .flush()
        .map_err(|e| BatchError::persistence(path, e))?;
    Ok(rows.len())
}
