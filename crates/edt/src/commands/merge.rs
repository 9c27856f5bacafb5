//! CLI command for the dataset merge

use std::path::PathBuf;

use clap::Args;
use element_data_core::{load_elements, load_properties, merge_datasets, save_json_pretty};

use crate::error::CliError;

/// Arguments for the `merge` command
///
/// The defaults are the conventional file names, so the plain invocation
/// `edt merge` reads `elements.json` and `data.json` from the working
/// directory and writes `detailElementsArray.json` next to them.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Path to the primary element dataset
    #[arg(long, default_value = "elements.json")]
    pub elements: PathBuf,

    /// Path to the secondary property dataset
    #[arg(long, default_value = "data.json")]
    pub properties: PathBuf,

    /// Path the merged dataset is written to
    #[arg(long, default_value = "detailElementsArray.json")]
    pub output: PathBuf,
}

/// Handle the `merge` command
pub fn handle_merge(args: &MergeArgs) -> Result<(), CliError> {
    eprintln!("Merging element datasets...");

    let elements =
        load_elements(&args.elements).map_err(|e| CliError::MergeError(e.to_string()))?;
    let properties =
        load_properties(&args.properties).map_err(|e| CliError::MergeError(e.to_string()))?;

    eprintln!("  Elements: {}", elements.len());
    eprintln!("  Property records: {}", properties.len());

    let merged =
        merge_datasets(&elements, &properties).map_err(|e| CliError::MergeError(e.to_string()))?;

    save_json_pretty(&args.output, &merged).map_err(|e| CliError::MergeError(e.to_string()))?;

    eprintln!();
    eprintln!("Merged data saved to {}", args.output.display());
    Ok(())
}
