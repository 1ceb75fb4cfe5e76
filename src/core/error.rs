use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced to the host. All fatal for the invocation; no retries.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("could not find folder {:?}, tried: {:?}", .requested, .attempted)]
    FolderNotFound {
        requested: String,
        attempted: Vec<PathBuf>,
    },

    #[error("no files matching extensions [{}] in {}", .extensions, .dir.display())]
    NoMatchingFiles { dir: PathBuf, extensions: String },

    #[error(transparent)]
    Decode(#[from] image::ImageError),

    #[error("invalid node parameters: {0}")]
    Params(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("pixel buffer shape mismatch: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
