use chrono::NaiveDateTime;

use super::{BatchConfig, BatchError, BatchResult};
use crate::model::{
    arrival::ArrivalResponse,
    filter::TIMESTAMP_FORMAT,
    persist::{append_log_line, append_rows},
    source::ArrivalSource,
};

/// runs fetch → parse → filter → persist → log for one station.
#[derive(Debug)]
pub struct BatchRunner<S> {
    config: BatchConfig,
    source: S,
}

impl<S: ArrivalSource> BatchRunner<S> {
    pub fn new(config: BatchConfig, source: S) -> BatchRunner<S> {
        BatchRunner { config, source }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// runs one batch invocation stamped with `time`. the run log receives a
    /// line whether or not the batch succeeded. a fetch or parse failure aborts
    /// before anything is written to the CSV file.
    ///
    /// # Result
    /// the logged result on success. on failure, the batch error, or the run log
    /// error if the batch itself succeeded but its log line could not be written.
    pub fn run(&self, time: NaiveDateTime) -> Result<BatchResult, BatchError> {
        log::info!("running batch at {}", time.format(TIMESTAMP_FORMAT));
        let attempt = self.collect(&time);
        let result = match &attempt {
            Ok(row_count) => BatchResult::success(time, *row_count),
            Err(e) => BatchResult::failure(time, e),
        };
        let logged = append_log_line(&self.config.output.log_file, &result);

        match (attempt, logged) {
            (Ok(_), Ok(())) => Ok(result),
            (Ok(_), Err(log_error)) => Err(log_error),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(log_error)) => {
                log::error!("failed to record batch failure in run log: {log_error}");
                Err(e)
            }
        }
    }

    /// fetches, filters and appends rows, returning the number of rows written.
    fn collect(&self, time: &NaiveDateTime) -> Result<usize, BatchError> {
        let body = self.source.fetch()?;
        let response = ArrivalResponse::from_json(&body)?;
        match response.result_code() {
            Some(0) | None => log::debug!(
                "upstream query time {}",
                response.query_time().unwrap_or("unknown")
            ),
            Some(code) => log::warn!(
                "upstream returned result code {code}: {}",
                response.result_message().unwrap_or_default()
            ),
        }

        let records = response.into_records();
        let rows = self.config.filter.apply(time, &records);
        log::info!("{} of {} arrivals passed the filter", rows.len(), records.len());

        let written = append_rows(&self.config.output.csv_file, &rows)?;
        if written > 0 {
            log::info!(
                "appended {written} rows to {}",
                self.config.output.csv_file.display()
            );
        }
        Ok(written)
    }
}

#[cfg(test)]
mod test {
    use super::BatchRunner;
    use crate::model::batch::{BatchConfig, BatchError, OutputConfig};
    use crate::model::filter::ArrivalFilter;
    use crate::model::source::{ApiConfig, ArrivalSource};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::fs;
    use std::path::Path;

    const THREE_ARRIVALS: &str = r#"{
        "response": {
            "comMsgHeader": "",
            "msgHeader": {"queryTime": "2025-01-06 08:10:11.123", "resultCode": 0, "resultMessage": "ok"},
            "msgBody": {
                "busArrivalList": [
                    {"routeName": 1009, "stationNm1": "의왕톨게이트", "predictTime1": "5", "remainSeatCnt1": 12},
                    {"routeName": 42, "stationNm1": "청계요금소", "predictTime1": 3, "remainSeatCnt1": 30},
                    {"routeName": "1009", "stationNm1": "인덕원", "predictTime1": "12"}
                ]
            }
        }
    }"#;

    struct FixedSource(&'static str);

    impl ArrivalSource for FixedSource {
        fn fetch(&self) -> Result<String, BatchError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource;

    impl ArrivalSource for FailingSource {
        fn fetch(&self) -> Result<String, BatchError> {
            Err(BatchError::FetchError(String::from(
                "unexpected HTTP status 500 Internal Server Error",
            )))
        }
    }

    fn batch_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(8, 10, 0)
            .unwrap()
    }

    fn config(dir: &Path, filter: ArrivalFilter) -> BatchConfig {
        BatchConfig {
            api: ApiConfig::new(ApiConfig::DEFAULT_BASE_URL, "226000039", "key"),
            filter,
            output: OutputConfig::new(dir.join("data.csv"), dir.join("result.log")),
        }
    }

    #[test]
    fn test_one_match_appends_one_row_and_one_log_line() {
        let dir = tempfile::tempdir().unwrap();
        let conf = config(dir.path(), ArrivalFilter::new(Some(1009), Some(10)));
        let runner = BatchRunner::new(conf, FixedSource(THREE_ARRIVALS));

        let result = runner.run(batch_time()).expect("batch should succeed");
        assert_eq!(result.row_count, 1);
        assert!(result.is_success());

        let csv = fs::read_to_string(dir.path().join("data.csv")).unwrap();
        assert_eq!(
            csv,
            "time,predict_time,remain_seat,station_name\n2025-01-06 08:10:00,5,12,의왕톨게이트\n"
        );
        let log = fs::read_to_string(dir.path().join("result.log")).unwrap();
        assert_eq!(log, "2025-01-06 08:10:00 | Count: 1 | Status: success\n");
    }

    #[test]
    fn test_repeated_runs_share_one_header() {
        let dir = tempfile::tempdir().unwrap();
        let conf = config(dir.path(), ArrivalFilter::new(Some(1009), Some(10)));
        let runner = BatchRunner::new(conf, FixedSource(THREE_ARRIVALS));
        runner.run(batch_time()).unwrap();
        runner.run(batch_time()).unwrap();

        let csv = fs::read_to_string(dir.path().join("data.csv")).unwrap();
        assert_eq!(csv.lines().count(), 3);
        let log = fs::read_to_string(dir.path().join("result.log")).unwrap();
        assert_eq!(log.lines().count(), 2);
    }

    #[test]
    fn test_unfiltered_run_uses_seat_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let runner = BatchRunner::new(
            config(dir.path(), ArrivalFilter::default()),
            FixedSource(THREE_ARRIVALS),
        );
        let result = runner.run(batch_time()).unwrap();
        assert_eq!(result.row_count, 3);
        let csv = fs::read_to_string(dir.path().join("data.csv")).unwrap();
        let last = csv.lines().last().unwrap();
        assert_eq!(last, "2025-01-06 08:10:00,12,-1,인덕원");
    }

    #[test]
    fn test_no_matches_logs_zero_and_skips_csv() {
        let dir = tempfile::tempdir().unwrap();
        let runner = BatchRunner::new(
            config(dir.path(), ArrivalFilter::new(Some(7777), None)),
            FixedSource(THREE_ARRIVALS),
        );
        let result = runner.run(batch_time()).unwrap();
        assert_eq!(result.row_count, 0);
        assert!(!dir.path().join("data.csv").exists());
        let log = fs::read_to_string(dir.path().join("result.log")).unwrap();
        assert_eq!(log, "2025-01-06 08:10:00 | Count: 0 | Status: success\n");
    }

    #[test]
    fn test_fetch_failure_logs_error_without_csv_write() {
        let dir = tempfile::tempdir().unwrap();
        let runner = BatchRunner::new(config(dir.path(), ArrivalFilter::default()), FailingSource);
        let result = runner.run(batch_time());
        assert!(matches!(result, Err(BatchError::FetchError(_))));
        assert!(!dir.path().join("data.csv").exists());

        let log = fs::read_to_string(dir.path().join("result.log")).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("2025-01-06 08:10:00 | Count: 0 | Status: error: "));
        assert!(lines[0].contains("500"));
    }

    #[test]
    fn test_malformed_body_is_parse_error_without_csv_write() {
        let dir = tempfile::tempdir().unwrap();
        let runner = BatchRunner::new(
            config(dir.path(), ArrivalFilter::default()),
            FixedSource("<OpenAPI_ServiceResponse>SERVICE_KEY_IS_NOT_REGISTERED_ERROR"),
        );
        let result = runner.run(batch_time());
        assert!(matches!(result, Err(BatchError::ParseError { .. })));
        assert!(!dir.path().join("data.csv").exists());
        let log = fs::read_to_string(dir.path().join("result.log")).unwrap();
        assert!(log.contains("Status: error: failed to parse JSON"));
    }

    #[test]
    fn test_log_failure_keeps_csv_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut conf = config(dir.path(), ArrivalFilter::new(Some(1009), Some(10)));
        conf.output.log_file = dir.path().join("missing").join("result.log");
        let runner = BatchRunner::new(conf, FixedSource(THREE_ARRIVALS));

        let result = runner.run(batch_time());
        assert!(matches!(result, Err(BatchError::PersistenceError { .. })));
        let csv = fs::read_to_string(dir.path().join("data.csv")).unwrap();
        assert_eq!(csv.lines().count(), 2);
    }
}
