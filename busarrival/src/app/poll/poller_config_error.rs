#[derive(thiserror::Error, Debug)]
pub enum PollerConfigError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("no service key configured, set SERVICE_KEY, BUSARRIVAL__API__SERVICE_KEY or [api] service_key")]
    MissingServiceKey,
    #[error("no station id configured")]
    MissingStationId,
}
