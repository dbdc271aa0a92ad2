use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    #[error("failed to fetch arrivals: {0}")]
    FetchError(String),
    #[error("failed to parse JSON: {source}")]
    ParseError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure writing to file {}: {source}", path.display())]
    PersistenceError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl BatchError {
    pub fn persistence<P: Into<PathBuf>>(path: P, source: std::io::Error) -> BatchError {
        BatchError::PersistenceError {
            path: path.into(),
            source,
        }
    }
}
