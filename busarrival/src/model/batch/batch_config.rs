use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::{filter::ArrivalFilter, source::ApiConfig};

/// everything a batch invocation needs, passed explicitly to the
/// [`super::BatchRunner`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BatchConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub filter: ArrivalFilter,
    #[serde(default)]
    pub output: OutputConfig,
}

/// locations of the append-only output files.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_csv_file")]
    pub csv_file: PathBuf,
    #[serde(default = "OutputConfig::default_log_file")]
    pub log_file: PathBuf,
}

impl OutputConfig {
    pub fn new<P: Into<PathBuf>>(csv_file: P, log_file: P) -> OutputConfig {
        OutputConfig {
            csv_file: csv_file.into(),
            log_file: log_file.into(),
        }
    }

    fn default_csv_file() -> PathBuf {
        PathBuf::from("./data.csv")
    }

    fn default_log_file() -> PathBuf {
        PathBuf::from("./result.log")
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_file: Self::default_csv_file(),
            log_file: Self::default_log_file(),
        }
    }
}
