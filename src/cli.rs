use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitcal")]
#[command(about = "Contribution calendar for your local git repositories")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to the repository registry file")]
    pub registry: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    Scan {
        #[arg(help = "Folder to scan for git repositories")]
        folder: PathBuf,
    },
    Stats {
        #[arg(help = "Author email to count commits for")]
        email: String,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let registry_path = match self.common.registry {
            Some(path) => path,
            None => crate::registry::default_path()?,
        };

        match self.command {
            Commands::Scan { folder } => crate::scan::exec(&registry_path, &folder),
            Commands::Stats { email } => crate::calendar::exec(&registry_path, &email),
        }
    }
}
