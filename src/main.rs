//! CLI entry point for the white band image filter

use clap::Parser;
use whiteband::io::cli::Cli;

fn main() -> whiteband::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    cli.run().map(|_report| ())
}
