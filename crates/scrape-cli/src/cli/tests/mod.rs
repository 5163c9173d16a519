//! CLI tests: argument parsing and run output.

use super::{Cli, ParseOutcome};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

mod outcome;
