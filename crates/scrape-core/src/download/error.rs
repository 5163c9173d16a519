//! Per-link failure type for the download loop.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single media link could not be saved. None of these abort the page.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The href could not be resolved against the page URL.
    #[error("invalid link: {0}")]
    Resolve(#[from] url::ParseError),
    /// GET failed (curl error or non-2xx status).
    #[error("{0:#}")]
    Fetch(anyhow::Error),
    /// Writing the body to the destination failed.
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
