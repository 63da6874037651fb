use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures of the host around the note file and diagnostics.
#[derive(Error, Debug)]
pub enum StockInfoError {
    #[error("Failed to read note {path}: {source}")]
    ReadNote {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write note {path}: {source}")]
    WriteNote {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),
}
