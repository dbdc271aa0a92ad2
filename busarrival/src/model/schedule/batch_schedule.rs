use chrono::{Local, NaiveDateTime};
use std::time::{Duration, Instant};

use crate::model::batch::{BatchError, BatchResult};

/// how often batch invocations are triggered. invocations are strictly
/// sequential: a tick never starts while the previous batch is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// a single invocation. its failure is returned to the caller.
    Once,
    /// an invocation right away, then one every `period`. failures are logged
    /// and the loop carries on. ticks missed while a batch was running are
    /// dropped, not caught up. runs forever unless `max_runs` is set.
    Interval {
        period: Duration,
        max_runs: Option<usize>,
    },
}

impl Schedule {
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(10 * 60);

    /// drives `batch` according to this schedule, passing each invocation the
    /// local wall-clock time it was triggered at.
    ///
    /// # Result
    /// the number of invocations made, or the failure of a [`Schedule::Once`] run.
    pub fn run<F>(&self, batch: F) -> Result<usize, BatchError>
    where
        F: FnMut(NaiveDateTime) -> Result<BatchResult, BatchError>,
    {
        self.run_with_clock(batch, || Local::now().naive_local())
    }

    pub fn run_with_clock<F, C>(&self, mut batch: F, mut clock: C) -> Result<usize, BatchError>
    where
        F: FnMut(NaiveDateTime) -> Result<BatchResult, BatchError>,
        C: FnMut() -> NaiveDateTime,
    {
        match self {
            Schedule::Once => {
                batch(clock())?;
                Ok(1)
            }
            Schedule::Interval { period, max_runs } => {
                let start = Instant::now();
                let mut runs: usize = 0;
                loop {
                    let time = clock();
                    match batch(time) {
                        Ok(result) => log::info!("batch finished: {result}"),
                        Err(e) => log::error!("batch failed at {time}: {e}"),
                    }
                    runs += 1;
                    if max_runs.is_some_and(|max| runs >= max) {
                        return Ok(runs);
                    }
                    std::thread::sleep(until_next_tick(start.elapsed(), *period));
                }
            }
        }
    }
}

/// time left until the next multiple of `period` after `elapsed`.
fn until_next_tick(elapsed: Duration, period: Duration) -> Duration {
    if period.is_zero() {
        return Duration::ZERO;
    }
    let period_nanos = period.as_nanos();
    let into_period = elapsed.as_nanos() % period_nanos;
    let remaining = period_nanos - into_period;
    Duration::from_nanos(remaining as u64)
}
