use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the scenario document. Always fatal at startup.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read scenario file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scenario document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("scenario document contains no scenarios")]
    Empty,
    #[error("scenario at position {position} has id {id} (ids must be 1-based and contiguous)")]
    NonContiguous { position: usize, id: u32 },
}

/// Why a requested scenario index could not be resolved
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("scenario {requested} is outside 1-{max}")]
    OutOfRange { requested: String, max: usize },
    #[error("{0:?} is not a scenario number")]
    NotANumber(String),
}

/// Optional media problems. Never surfaced to users.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("media asset not found: {0:?}")]
    Missing(PathBuf),
    #[error("failed to send media asset {path:?}: {reason}")]
    SendFailure { path: PathBuf, reason: String },
}
