//! CLI command for catalog generation

use std::path::PathBuf;

use clap::Args;
use element_data_core::catalog::{CatalogConfig, CatalogGenerator};

use crate::error::CliError;

/// Arguments for the `generate` command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of catalog files to create
    #[arg(long, default_value_t = 10)]
    pub files: usize,

    /// Number of products per file
    #[arg(long = "per-file", default_value_t = 10)]
    pub per_file: usize,

    /// Directory the files are written into
    #[arg(long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,
}

/// Handle the `generate` command
pub fn handle_generate(args: &GenerateArgs) -> Result<(), CliError> {
    let config = CatalogConfig::builder()
        .file_count(args.files)
        .products_per_file(args.per_file)
        .build();

    eprintln!("Generating product catalog...");
    eprintln!("  Files: {}", config.file_count);
    eprintln!("  Products per file: {}", config.products_per_file);

    let generator = CatalogGenerator::new(config);
    let written = generator
        .write_catalog(&args.out_dir)
        .map_err(|e| CliError::CatalogError(e.to_string()))?;

    for path in &written {
        eprintln!("Created {}", path.display());
    }
    Ok(())
}
