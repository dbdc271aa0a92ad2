use std::{fs::OpenOptions, io::Write, path::Path};

use crate::model::batch::{BatchError, BatchResult};

/// appends one line for a batch invocation to the run log at `path`.
pub fn append_log_line(path: &Path, result: &BatchResult) -> Result<(), BatchError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BatchError::persistence(path, e))?;
    writeln!(file, "{result}").map_err(|e| BatchError::persistence(path, e))
}
