use super::load_batch_config;
use crate::app::PollerCliError;
use crate::model::batch::BatchRunner;
use crate::model::schedule::Schedule;
use crate::model::source::HttpArrivalSource;

/// polls the bus arrival service on a schedule, appending matching arrivals
/// to the configured CSV file and one status line per batch to the run log.
///
/// # Arguments
/// * config_file - optional TOML or JSON file layered over the defaults
/// * schedule - when to run batches
///
/// # Result
/// the number of batches run, or the configuration error or failure of a
/// single-shot batch.
pub fn run_poll(config_file: Option<&str>, schedule: &Schedule) -> Result<usize, PollerCliError> {
    let config = load_batch_config(config_file)?;
    log::debug!("run_poll with config={config:?}, schedule={schedule:?}");
    log::info!(
        "polling station {} into {:?}, run log {:?}",
        config.api.station_id,
        config.output.csv_file,
        config.output.log_file
    );
    let source = HttpArrivalSource::new(config.api.clone())?;
    let runner = BatchRunner::new(config, source);
    let runs = schedule.run(|time| runner.run(time))?;
    Ok(runs)
}
