//! Download loop: fetch every (href, name) pair of a page's name table to disk.
//!
//! One link at a time, each fully written before the next starts. A failing
//! link is reported and skipped; it never stops the loop. Progress the user
//! should see is sent as [`ScrapeEvent`]s; the caller decides how to show it.

mod error;

pub use error::LinkError;

use std::path::{Path, PathBuf};
use url::Url;

use crate::http::{self, CurlOptions};
use crate::naming::NameTable;

/// Outcome counts of one download loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub downloaded: usize,
    pub failed: usize,
    pub bytes: u64,
}

/// User-facing progress from the download loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeEvent {
    /// About to fetch `url` into `path`.
    Downloading { url: String, path: PathBuf },
    /// `link` (as written in the page) could not be saved.
    LinkFailed { link: String, error: String },
}

/// Channel the loop reports [`ScrapeEvent`]s on.
pub type EventSender = tokio::sync::mpsc::Sender<ScrapeEvent>;

async fn emit(events: Option<&EventSender>, event: ScrapeEvent) {
    if let Some(tx) = events {
        // A closed receiver only means nobody is watching.
        let _ = tx.send(event).await;
    }
}

/// Resolves `href` against `page_url`, fetches it and writes it to `dest_dir/name`.
///
/// Overwrites any existing file at that path. Returns bytes written.
pub async fn download_one(
    page_url: &Url,
    href: &str,
    name: &str,
    dest_dir: &Path,
    curl: &CurlOptions,
    events: Option<&EventSender>,
) -> Result<u64, LinkError> {
    let full_url = page_url.join(href)?;
    let path = dest_dir.join(name);
    emit(
        events,
        ScrapeEvent::Downloading {
            url: full_url.to_string(),
            path: path.clone(),
        },
    )
    .await;

    let body = http::fetch_bytes(full_url.as_str(), curl)
        .await
        .map_err(LinkError::Fetch)?;
    tokio::fs::write(&path, &body)
        .await
        .map_err(|source| LinkError::Write {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(url = %full_url, path = %path.display(), bytes = body.len(), "saved");
    Ok(body.len() as u64)
}

/// Downloads every entry of `table` in table order.
pub async fn download_all(
    page_url: &Url,
    table: &NameTable,
    dest_dir: &Path,
    curl: &CurlOptions,
    events: Option<&EventSender>,
) -> DownloadSummary {
    let mut summary = DownloadSummary::default();
    for (href, name) in table.iter() {
        match download_one(page_url, href, name, dest_dir, curl, events).await {
            Ok(bytes) => {
                summary.downloaded += 1;
                summary.bytes += bytes;
            }
            Err(err) => {
                tracing::warn!(link = href, error = %err, "link failed");
                summary.failed += 1;
                emit(
                    events,
                    ScrapeEvent::LinkFailed {
                        link: href.to_string(),
                        error: err.to_string(),
                    },
                )
                .await;
            }
        }
    }
    summary
}
