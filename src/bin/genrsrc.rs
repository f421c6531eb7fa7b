//! genrsrc CLI Binary
//!
//! Command-line interface for the resource compiler.

use anyhow::Context;
use clap::Parser;
use genrsrc::logging::init_logging;
use genrsrc::tooling::cli::{Cli, CliContext};
use std::process;

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context = CliContext::new(&cli).context("Failed to load configuration")?;
    init_logging(&context.config().logging).context("Failed to initialize logging")?;

    let output = context.execute(&cli)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
