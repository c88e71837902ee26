use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Failed to read {path}: {source}", path = .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No overlapping measurements between local and fork runs")]
    NoOverlap,
    #[error("No overlapping measurements with a positive local gas value")]
    NoPositiveBaseline,
    #[error("Unknown output format '{0}' (expected 'table' or 'json')")]
    UnknownFormat(String),
}
