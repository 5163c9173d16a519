//! `scrape --dest-dir <DIR> <URLS>...` – scan every page and download its media.

use anyhow::{Context, Result};
use scrape_core::config::ScrapeConfig;
use scrape_core::download::ScrapeEvent;
use scrape_core::http::CurlOptions;
use scrape_core::run::{self, RunOptions, DONE_MARKER};
use std::io::{self, Write};

pub async fn run_scrape(opts: &RunOptions, cfg: &ScrapeConfig) -> Result<()> {
    run_scrape_with_output(opts, &cfg.curl_options(), io::stdout(), io::stderr()).await?;
    Ok(())
}

fn print_event(event: &ScrapeEvent, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    match event {
        ScrapeEvent::Downloading { url, path } => {
            writeln!(out, "downloading: {} as {}", url, path.display())
        }
        ScrapeEvent::LinkFailed { link, error } => {
            writeln!(err, "error: could not fetch {}: {}", link, error)
        }
    }
}

/// Runs the scrape, printing progress to `out` and link errors to `err`.
///
/// [`DONE_MARKER`] goes to `out` once every page has been processed, even when
/// some links failed. Returns the writers so callers can inspect them.
pub(crate) async fn run_scrape_with_output<O, E>(
    opts: &RunOptions,
    curl: &CurlOptions,
    out: O,
    err: E,
) -> Result<(O, E)>
where
    O: Write + Send + 'static,
    E: Write + Send + 'static,
{
    tracing::info!(
        pages = opts.page_urls.len(),
        dest = %opts.dest_dir.display(),
        "starting scrape"
    );

    let (event_tx, mut event_rx) = tokio::sync::mpsc::channel::<ScrapeEvent>(16);
    let printer = tokio::spawn(async move {
        let (mut out, mut err) = (out, err);
        while let Some(event) = event_rx.recv().await {
            if let Err(e) = print_event(&event, &mut out, &mut err) {
                tracing::warn!("could not print progress: {}", e);
            }
        }
        (out, err)
    });

    let result = run::run_pages(opts, curl, Some(&event_tx)).await;
    drop(event_tx);
    let (mut out, err) = printer.await.context("output task join")?;
    let reports = result?;

    writeln!(out, "{}", DONE_MARKER)?;
    out.flush()?;

    let downloaded: usize = reports.iter().map(|r| r.summary.downloaded).sum();
    let failed: usize = reports.iter().map(|r| r.summary.failed).sum();
    tracing::info!(
        "run completed {} page(s): {} file(s) saved, {} link(s) failed",
        reports.len(),
        downloaded,
        failed
    );
    Ok((out, err))
}
