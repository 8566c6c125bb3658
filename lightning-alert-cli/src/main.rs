//! Lightning Alert CLI - Command-line interface
//!
//! Reads an asset catalog and a file of lightning strikes (one JSON object per
//! line) and prints an alert for every asset in a struck tile.

mod error;
mod runner;

use clap::Parser;
use std::path::PathBuf;

use crate::runner::CliRunner;

#[derive(Parser)]
#[command(name = "lightning-alert")]
#[command(version)]
#[command(about = "Alert asset owners about nearby lightning strikes", long_about = None)]
struct Args {
    /// JSON file containing the asset catalog
    #[arg(short, long)]
    assets: PathBuf,

    /// File containing lightning strike JSON objects, one per line
    #[arg(short, long, visible_alias = "events")]
    requests: PathBuf,

    /// Configuration file (default: ~/.lightning-alert/config.ini)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let runner = match CliRunner::new(args.config.as_deref(), args.debug) {
        Ok(runner) => runner,
        Err(e) => e.exit(),
    };

    runner.log_startup();

    if let Err(e) = runner.run(&args.assets, &args.requests) {
        e.exit();
    }
}
