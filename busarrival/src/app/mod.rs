mod arrival_cli;
mod poller_cli_error;
pub mod poll;

pub use arrival_cli::{BusArrivalCliArguments, BusArrivalOperation};
pub use poller_cli_error::PollerCliError;
