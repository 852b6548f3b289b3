use anyhow::Result;
use clap::Parser;
use commitplot::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
