mod batch_config;
mod batch_error;
mod batch_result;
mod batch_runner;

pub use batch_config::{BatchConfig, OutputConfig};
pub use batch_error::BatchError;
pub use batch_result::{BatchOutcome, BatchResult};
pub use batch_runner::BatchRunner;
