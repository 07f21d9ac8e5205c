//! unitext command-line entry point

use anyhow::Result;
use clap::Parser;
use unitext_cli::commands::Commands;

/// Unicode punctuation normalization toolkit
#[derive(Debug, Parser)]
#[command(name = "unitext", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
