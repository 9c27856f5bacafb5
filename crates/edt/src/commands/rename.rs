//! CLI command for sequential image renaming

use std::path::PathBuf;

use clap::Args;
use element_data_core::rename::{apply_renames, plan_renames};

use crate::error::CliError;

/// Arguments for the `rename` command
#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Directory whose image files are renamed
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

/// Handle the `rename` command
pub fn handle_rename(args: &RenameArgs) -> Result<(), CliError> {
    let plan = plan_renames(&args.dir).map_err(|e| CliError::RenameError(e.to_string()))?;

    if plan.entries.is_empty() {
        eprintln!("No image files to rename in {}", args.dir.display());
        return Ok(());
    }

    apply_renames(&plan).map_err(|e| CliError::RenameError(e.to_string()))?;

    for entry in &plan.entries {
        eprintln!(
            "Renamed: {} -> {}",
            entry.from.display(),
            entry.to.display()
        );
    }
    eprintln!("Renamed {} file(s)", plan.entries.len());
    Ok(())
}
