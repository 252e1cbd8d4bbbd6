//! dicgen - Collect a transcript corpus vocabulary into a dictionary seed file
//!
//! dicgen provides:
//! - Vocabulary collection (one lowercased token per line)
//! - Token frequency inspection
//! - Source listing for the input directory
//! - Unified output format for inspection commands (jsonl/json/md/raw)

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;
mod vocab;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
