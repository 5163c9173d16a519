//! Top-level driver: scrape each page URL in order, one page at a time.

use anyhow::{Context, Result};
use std::path::PathBuf;
use url::Url;

use crate::download::{self, DownloadSummary, EventSender};
use crate::http::{self, CurlOptions};
use crate::media;
use crate::naming::NameTable;

/// Completion line the CLI prints once every page has been processed.
pub const DONE_MARKER: &str = "--done--";

/// What to scrape and where to put it. Built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Existing, writable directory for downloaded files. Never created.
    pub dest_dir: PathBuf,
    /// Pages to scan, processed in this order.
    pub page_urls: Vec<String>,
}

/// Result of scraping one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub page_url: String,
    /// Final HTTP status of the page itself.
    pub status: u32,
    /// Distinct media hrefs found on the page.
    pub links_found: usize,
    pub summary: DownloadSummary,
}

/// Fetches one page, builds its name table and downloads every media link.
///
/// A page that cannot be fetched at all is an error. A page answering with a
/// non-2xx status is logged and its body scanned like any other. Link failures
/// are counted in the report.
pub async fn scrape_page(
    page_url: &str,
    dest_dir: &std::path::Path,
    curl: &CurlOptions,
    events: Option<&EventSender>,
) -> Result<PageReport> {
    let base = Url::parse(page_url).with_context(|| format!("invalid page URL: {}", page_url))?;
    let response = http::fetch_response(base.as_str(), curl)
        .await
        .with_context(|| format!("fetch page {}", page_url))?;
    if !response.is_success() {
        tracing::warn!(
            page = page_url,
            status = response.code,
            "page returned non-2xx status; scanning body anyway"
        );
    }
    let html = response.text();

    let table = build_name_table(&html)?;
    tracing::info!(page = page_url, links = table.len(), "scanned page");

    let summary = download::download_all(&base, &table, dest_dir, curl, events).await;
    Ok(PageReport {
        page_url: page_url.to_string(),
        status: response.code,
        links_found: table.len(),
        summary,
    })
}

// Kept out of the async fn so the parsed document is never held across an await.
fn build_name_table(html: &str) -> Result<NameTable> {
    let links = media::extract_media_links(html)?;
    Ok(NameTable::from_links(&links))
}

/// Scrapes every page in `opts`.
///
/// Pages run strictly one after another and share no state. The first page
/// that cannot be fetched aborts the run.
pub async fn run_pages(
    opts: &RunOptions,
    curl: &CurlOptions,
    events: Option<&EventSender>,
) -> Result<Vec<PageReport>> {
    let mut reports = Vec::with_capacity(opts.page_urls.len());
    for page_url in &opts.page_urls {
        let report = scrape_page(page_url, &opts.dest_dir, curl, events).await?;
        tracing::info!(
            page = %report.page_url,
            status = report.status,
            links = report.links_found,
            downloaded = report.summary.downloaded,
            failed = report.summary.failed,
            bytes = report.summary.bytes,
            "page done"
        );
        reports.push(report);
    }

    Ok(reports)
}
