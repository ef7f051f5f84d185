//! Binary entry point for the `nutrack` command-line nutrition tracker.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
