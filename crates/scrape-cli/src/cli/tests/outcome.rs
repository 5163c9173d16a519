//! Tests for what `main` does with each parse result.

use super::ParseOutcome;
use crate::cli::parse_args;
use scrape_core::run::RunOptions;
use std::path::PathBuf;

#[test]
fn valid_args_become_run_options() {
    let outcome = parse_args(["scrape", "--dest-dir", "out", "http://example.com/page"]);
    assert_eq!(
        outcome,
        ParseOutcome::Run(RunOptions {
            dest_dir: PathBuf::from("out"),
            page_urls: vec!["http://example.com/page".to_string()],
        })
    );
}

#[test]
fn help_exits_without_running() {
    let outcome = parse_args(["scrape", "--dest-dir", "out", "http://example.com/", "--help"]);
    assert_eq!(outcome, ParseOutcome::Exit);
}

#[test]
fn version_exits_without_running() {
    assert_eq!(parse_args(["scrape", "--version"]), ParseOutcome::Exit);
}

#[test]
fn usage_error_exits_without_running() {
    assert_eq!(parse_args(["scrape", "--nope"]), ParseOutcome::Exit);
    assert_eq!(parse_args(["scrape"]), ParseOutcome::Exit);
}
