mod poller_config_error;
mod poller_config_ops;
mod run;

pub use poller_config_error::PollerConfigError;
pub use poller_config_ops::{build_batch_config, load_batch_config, ENV_PREFIX, SERVICE_KEY_VAR};
pub use run::run_poll;
