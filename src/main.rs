//! CLI entry point for the kolam pattern generator

use clap::Parser;
use kolamgen::io::cli::{Cli, Runner};
use kolamgen::io::logging;

fn main() -> kolamgen::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);
    let runner = Runner::new(cli);
    runner.run().inspect_err(|error| tracing::error!("{error}"))
}
