use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while writing a prerendered page.
#[derive(Debug, Error)]
pub enum PrerenderError {
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write page to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write page to stdout")]
    Stdout(#[source] io::Error),
}
