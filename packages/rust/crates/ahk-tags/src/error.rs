//! Error types for tag generation.
//!
//! Library crates use `thiserror` for explicit error enums.

use std::path::PathBuf;

use thiserror::Error;

use ahk_io::IoError;

/// Error types for a tag generation run
#[derive(Error, Debug)]
pub enum TagError {
    /// An input script could not be read; the run is aborted
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// Script that failed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: IoError,
    },
    /// The tag file could not be written
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// Destination tag file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: IoError,
    },
    /// Standard output was closed or failed
    #[error("cannot write to stdout: {0}")]
    Stdout(#[from] std::io::Error),
}
