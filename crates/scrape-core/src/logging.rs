//! Diagnostic logging for the scraper.
//!
//! Log lines are for diagnosing a run; what the user sees comes from the CLI's
//! own output. By default they go to `$XDG_STATE_HOME/scrape/scrape.log`; the
//! CLI switches to stderr when that file cannot be opened.
//!
//! Filtering follows `RUST_LOG` when it is set and valid. Otherwise
//! [`DEFAULT_FILTER`] keeps dependencies at `info` and both workspace targets
//! at `debug`: `scrape_core` (page driver, name table, downloads) and
//! `scrape_cli` (argument handling, run totals). Per-candidate naming decisions
//! are `trace` under `scrape_core::naming`, e.g.
//! `RUST_LOG=scrape_core::naming=trace`.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_FILTER: &str = "info,scrape_core=debug,scrape_cli=debug";

/// Per-event writer: the log file, or stderr for an event whose file handle could not be cloned.
enum LogSink {
    File(std::fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("scrape")?;
    Ok(dirs.get_state_home().join("scrape.log"))
}

/// Sends log events to the scrape log file, appending across runs.
///
/// Errors when the state directory or file cannot be opened, or a subscriber
/// is already installed; the caller then uses [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    struct FileMakeWriter(std::fs::File);

    impl<'a> MakeWriter<'a> for FileMakeWriter {
        type Writer = LogSink;

        fn make_writer(&'a self) -> Self::Writer {
            self.0
                .try_clone()
                .map(LogSink::File)
                .unwrap_or(LogSink::Stderr)
        }
    }

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::debug!(path = %path.display(), "logging to file");

    Ok(())
}

/// Sends log events to stderr. A second call is a no-op.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        let filter = EnvFilter::try_new(DEFAULT_FILTER).unwrap();
        let shown = filter.to_string();
        assert!(shown.contains("scrape_core=debug"), "{}", shown);
        assert!(shown.contains("scrape_cli=debug"), "{}", shown);
    }
}
