use anyhow::Result;
use clap::Parser;
use gitcal::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
