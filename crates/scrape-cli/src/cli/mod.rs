//! CLI for scrape.

mod run;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use scrape_core::config;
use scrape_core::run::RunOptions;
use std::ffi::OsString;
use std::path::PathBuf;

use run::run_scrape;

/// Top-level CLI: scan pages and download the gif/webm files they link to.
#[derive(Debug, Parser)]
#[command(name = "scrape", version)]
#[command(about = "Download gif/webm files linked from web pages", long_about = None)]
pub struct Cli {
    /// Directory to save files into. Must already exist.
    #[arg(long, value_name = "DEST_DIR")]
    pub dest_dir: PathBuf,

    /// Pages to scan, processed one after another in the given order.
    #[arg(required = true, value_name = "URLS")]
    pub urls: Vec<String>,
}

impl Cli {
    pub fn into_run_options(self) -> RunOptions {
        RunOptions {
            dest_dir: self.dest_dir,
            page_urls: self.urls,
        }
    }
}

/// What `main` should do after argument parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    Run(RunOptions),
    /// Help, version or a usage error was printed; exit successfully without scraping.
    Exit,
}

/// Parses `args`. Usage errors go to stderr followed by the help text, and are not fatal.
pub fn parse_args<I, T>(args: I) -> ParseOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => ParseOutcome::Run(cli.into_run_options()),
        Err(err) => {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                }
                _ => {
                    eprintln!("{}", err);
                    let _ = Cli::command().print_help();
                    println!();
                }
            }
            ParseOutcome::Exit
        }
    }
}

/// Parse process arguments, load config and run.
pub async fn run_from_args() -> Result<()> {
    let opts = match parse_args(std::env::args_os()) {
        ParseOutcome::Run(opts) => opts,
        ParseOutcome::Exit => return Ok(()),
    };
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    run_scrape(&opts, &cfg).await
}

#[cfg(test)]
mod tests;
