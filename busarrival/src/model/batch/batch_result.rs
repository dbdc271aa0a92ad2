use chrono::NaiveDateTime;
use std::fmt::Display;

use super::BatchError;
use crate::model::filter::TIMESTAMP_FORMAT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Success,
    Error(String),
}

/// summary of one batch invocation. only ever serialized as a run log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub time: NaiveDateTime,
    /// CSV data rows written by this batch, header excluded.
    pub row_count: usize,
    pub outcome: BatchOutcome,
}

impl BatchResult {
    pub fn success(time: NaiveDateTime, row_count: usize) -> BatchResult {
        BatchResult {
            time,
            row_count,
            outcome: BatchOutcome::Success,
        }
    }

    pub fn failure(time: NaiveDateTime, error: &BatchError) -> BatchResult {
        BatchResult {
            time,
            row_count: 0,
            outcome: BatchOutcome::Error(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Success)
    }
}

impl Display for BatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchOutcome::Success => write!(f, "success"),
            BatchOutcome::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}

/// `<time> | Count: <n> | Status: <outcome>`, without a trailing newline.
impl Display for BatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | Count: {} | Status: {}",
            self.time.format(TIMESTAMP_FORMAT),
            self.row_count,
            self.outcome
        )
    }
}
