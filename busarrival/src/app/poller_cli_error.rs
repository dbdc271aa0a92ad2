use super::poll::PollerConfigError;
use crate::model::batch::BatchError;

#[derive(thiserror::Error, Debug)]
pub enum PollerCliError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Config(#[from] PollerConfigError),
    #[error(transparent)]
    Batch(#[from] BatchError),
}
