use crate::core::io::gaussian::GaussianError;
use crate::core::io::xyz::XyzError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Cannot read input directory '{path}': {source}", path = path.display())]
    InputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse log file '{path}': {source}", path = path.display())]
    LogParsing {
        path: PathBuf,
        #[source]
        source: GaussianError,
    },

    #[error("Failed to write frame for '{path}' to the output file: {source}", path = path.display())]
    FrameWriting {
        path: PathBuf,
        #[source]
        source: XyzError,
    },

    #[error("I/O error on '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WorkflowError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
