use config::{Config, Environment};

use super::PollerConfigError;
use crate::model::batch::BatchConfig;

/// prefix of environment variables overriding configuration keys, e.g.
/// `BUSARRIVAL__FILTER__ROUTE_NAME=1009` sets `[filter] route_name`.
pub const ENV_PREFIX: &str = "BUSARRIVAL";

/// credential variable read by earlier deployments of this poller.
pub const SERVICE_KEY_VAR: &str = "SERVICE_KEY";

/// loads the batch configuration from defaults, an optional file and the
/// process environment.
pub fn load_batch_config(config_file: Option<&str>) -> Result<BatchConfig, PollerConfigError> {
    let env: config::Map<String, String> = std::env::vars().collect();
    build_batch_config(config_file, env)
}

/// layers configuration sources, lowest precedence first: built-in defaults,
/// `config_file` (format taken from its extension), `BUSARRIVAL__*` variables
/// and finally `SERVICE_KEY` for the credential.
pub fn build_batch_config(
    config_file: Option<&str>,
    env: config::Map<String, String>,
) -> Result<BatchConfig, PollerConfigError> {
    let mut builder = Config::builder();
    if let Some(f) = config_file {
        log::info!("reading busarrival configuration from {f}");
        builder = builder.add_source(config::File::with_name(f));
    }
    let service_key = env.get(SERVICE_KEY_VAR).cloned();
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .source(Some(env)),
    );
    if let Some(key) = service_key.filter(|k| !k.is_empty()) {
        builder = builder
            .set_override("api.service_key", key)
            .map_err(|e| PollerConfigError::ConfigReadError {
                msg: format!("failed applying {SERVICE_KEY_VAR}"),
                source: e,
            })?;
    }

    let config = builder
        .build()
        .map_err(|e| PollerConfigError::ConfigReadError {
            msg: String::from("failed reading configuration"),
            source: e,
        })?;
    let batch_config = config
        .try_deserialize::<BatchConfig>()
        .map_err(|e| PollerConfigError::ConfigReadError {
            msg: String::from("failed decoding configuration"),
            source: e,
        })?;

    if batch_config.api.service_key.trim().is_empty() {
        return Err(PollerConfigError::MissingServiceKey);
    }
    if batch_config.api.station_id.trim().is_empty() {
        return Err(PollerConfigError::MissingStationId);
    }
    Ok(batch_config)
}
