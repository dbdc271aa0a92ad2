use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use super::PollerCliError;
use crate::model::schedule::Schedule;

/// command line tool collecting bus arrival predictions into a CSV file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct BusArrivalCliArguments {
    /// select the operation to run
    #[command(subcommand)]
    pub op: BusArrivalOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum BusArrivalOperation {
    /// polls the arrival service for one station, appending filtered
    /// arrivals to a CSV file and a status line per batch to a run log.
    Poll {
        /// TOML or JSON configuration file. BUSARRIVAL__* and SERVICE_KEY
        /// environment variables take precedence over it.
        #[arg(short, long)]
        config_file: Option<String>,
        /// time between batches. provide in human-readable time values
        /// 2m, 30s, 2h, 2days...
        #[arg(short, long, value_parser = parse_duration, default_value = "10m")]
        interval: Duration,
        /// run a single batch and exit, failing if the batch fails.
        #[arg(long, default_value_t = false)]
        once: bool,
        /// stop after this many batches.
        #[arg(long, conflicts_with = "once")]
        max_runs: Option<usize>,
    },
}

impl BusArrivalOperation {
    pub fn run(&self) -> Result<(), PollerCliError> {
        match self {
            BusArrivalOperation::Poll {
                config_file,
                interval,
                once,
                max_runs,
            } => {
                let schedule = build_schedule(*interval, *once, *max_runs)?;
                let runs = crate::app::poll::run_poll(config_file.as_deref(), &schedule)?;
                log::info!("completed {runs} batch(es)");
                Ok(())
            }
        }
    }
}

fn build_schedule(
    interval: Duration,
    once: bool,
    max_runs: Option<usize>,
) -> Result<Schedule, PollerCliError> {
    if once {
        return Ok(Schedule::Once);
    }
    if max_runs == Some(0) {
        return Err(PollerCliError::InvalidArguments(String::from(
            "max-runs must be at least 1",
        )));
    }
    Ok(Schedule::Interval {
        period: interval,
        max_runs,
    })
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    let duration = humantime::parse_duration(s).map_err(|e| format!("Invalid duration: {e}"))?;
    if duration.is_zero() {
        return Err(String::from("Invalid duration: must be greater than zero"));
    }
    Ok(duration)
}

#[cfg(test)]
mod test {
    use super::{build_schedule, BusArrivalCliArguments, BusArrivalOperation};
    use crate::model::schedule::Schedule;
    use clap::Parser;
    use std::time::Duration;

    #[test]
    fn test_poll_defaults() {
        let args = BusArrivalCliArguments::try_parse_from(["busarrival", "poll"]).unwrap();
        match args.op {
            BusArrivalOperation::Poll {
                config_file,
                interval,
                once,
                max_runs,
            } => {
                assert_eq!(config_file, None);
                assert_eq!(interval, Schedule::DEFAULT_PERIOD);
                assert!(!once);
                assert_eq!(max_runs, None);
            }
        }
    }

    #[test]
    fn test_poll_arguments() {
        let args = BusArrivalCliArguments::try_parse_from([
            "busarrival",
            "poll",
            "--config-file",
            "busarrival.toml",
            "--interval",
            "30s",
            "--max-runs",
            "3",
        ])
        .unwrap();
        let BusArrivalOperation::Poll {
            config_file,
            interval,
            once,
            max_runs,
        } = args.op;
        assert_eq!(config_file.as_deref(), Some("busarrival.toml"));
        let schedule = build_schedule(interval, once, max_runs).unwrap();
        assert_eq!(
            schedule,
            Schedule::Interval {
                period: Duration::from_secs(30),
                max_runs: Some(3)
            }
        );
    }

    #[test]
    fn test_once_builds_single_shot() {
        let args =
            BusArrivalCliArguments::try_parse_from(["busarrival", "poll", "--once"]).unwrap();
        let BusArrivalOperation::Poll {
            interval,
            once,
            max_runs,
            ..
        } = args.op;
        assert_eq!(
            build_schedule(interval, once, max_runs).unwrap(),
            Schedule::Once
        );
    }

    #[test]
    fn test_rejects_bad_durations() {
        for bad in ["soon", "0s"] {
            let result =
                BusArrivalCliArguments::try_parse_from(["busarrival", "poll", "--interval", bad]);
            assert!(result.is_err(), "expected {bad} to be rejected");
        }
    }

    #[test]
    fn test_rejects_zero_max_runs() {
        assert!(build_schedule(Duration::from_secs(60), false, Some(0)).is_err());
    }
}
