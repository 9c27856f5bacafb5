//! `edt` - CLI for the element dataset utilities

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use commands::generate::{GenerateArgs, handle_generate};
use commands::merge::{MergeArgs, handle_merge};
use commands::rename::{RenameArgs, handle_rename};

#[derive(Parser)]
#[command(name = "edt", version, about = "Element dataset tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge the element and property datasets into one enriched dataset
    Merge(MergeArgs),
    /// Generate synthetic product-catalog files
    Generate(GenerateArgs),
    /// Rename image files in a directory to a sequential pattern
    Rename(RenameArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Merge(args) => handle_merge(&args)?,
        Commands::Generate(args) => handle_generate(&args)?,
        Commands::Rename(args) => handle_rename(&args)?,
    }

    Ok(())
}
