//! Transfer error type for page and media GETs.

use thiserror::Error;

/// Error returned by a single GET (curl failure or HTTP error status).
#[derive(Debug, Error)]
pub enum HttpError {
    /// Curl reported an error (bad URL, timeout, connection refused, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
}
