//! Plain HTTP GET for pages and media files.
//!
//! Uses the curl crate (libcurl) easy interface. Transfers are blocking; the
//! async wrappers run them on tokio's blocking pool and await completion, so a
//! caller never has more than one transfer in flight.

mod error;

pub use error::HttpError;

use anyhow::{Context, Result};
use std::time::Duration;

/// Per-request curl settings, built from `ScrapeConfig::curl_options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurlOptions {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    pub max_redirections: u32,
    pub user_agent: Option<String>,
}

impl Default for CurlOptions {
    fn default() -> Self {
        crate::config::ScrapeConfig::default().curl_options()
    }
}

/// Final status and body of a GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status of the last response after redirects.
    pub code: u32,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs a GET and returns whatever the server answered, whatever the status.
///
/// Follows redirects up to `max_redirections`. Only transport failures are errors.
/// Runs in the current thread; use [`fetch_response`] from async code.
pub fn get(url: &str, curl: &CurlOptions) -> Result<Response, HttpError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(curl.max_redirections)?;
    easy.connect_timeout(Duration::from_secs(curl.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(curl.timeout_secs))?;
    if let Some(ua) = &curl.user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    tracing::debug!(url, code, bytes = body.len(), "GET complete");
    Ok(Response { code, body })
}

/// Like [`get`] but a non-2xx final status is an error.
pub fn get_bytes(url: &str, curl: &CurlOptions) -> Result<Vec<u8>, HttpError> {
    let response = get(url, curl)?;
    if !response.is_success() {
        return Err(HttpError::Status {
            url: url.to_string(),
            code: response.code,
        });
    }
    Ok(response.body)
}

/// Runs [`get`] on the blocking pool and waits for it.
pub async fn fetch_response(url: &str, curl: &CurlOptions) -> Result<Response> {
    let response = tokio::task::spawn_blocking({
        let url = url.to_string();
        let curl = curl.clone();
        move || get(&url, &curl)
    })
    .await
    .context("fetch task join")??;
    Ok(response)
}

/// Runs [`get_bytes`] on the blocking pool and waits for it.
pub async fn fetch_bytes(url: &str, curl: &CurlOptions) -> Result<Vec<u8>> {
    let body = tokio::task::spawn_blocking({
        let url = url.to_string();
        let curl = curl.clone();
        move || get_bytes(&url, &curl)
    })
    .await
    .context("fetch task join")??;
    Ok(body)
}
