//! Rename planning and application

use std::fs;
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use tracing::{info, warn};

use super::error::RenameError;

/// File extensions treated as images
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// A planned rename
#[derive(Debug, Clone, PartialEq)]
pub struct RenameEntry {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// An ordered set of renames for one directory
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    pub entries: Vec<RenameEntry>,
}

/// Plan sequential renames for the image files in `dir`
///
/// Files are matched by extension (case-insensitive), sorted
/// lexicographically by file name, and assigned `image{index}{ext}`
/// targets with a zero-padded 0-based index. The original extension is
/// preserved as-is. Files already carrying their target name are omitted
/// from the plan.
pub fn plan_renames(dir: &Path) -> Result<RenamePlan, RenameError> {
    if !dir.is_dir() {
        return Err(RenameError::DirectoryNotFound(dir.to_path_buf()));
    }

    let files = discover_images(dir)?;
    let width = pad_width(files.len());

    let mut entries = Vec::new();
    for (index, from) in files.into_iter().enumerate() {
        let ext = from
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();
        let to = dir.join(format!("image{:0width$}{}", index, ext, width = width));
        if from == to {
            continue;
        }
        entries.push(RenameEntry { from, to });
    }

    Ok(RenamePlan { entries })
}

/// Apply a plan, returning the number of files renamed
///
/// Runs in two phases (sources to staging names, staging names to
/// targets) so overlapping source and target names are never clobbered.
pub fn apply_renames(plan: &RenamePlan) -> Result<usize, RenameError> {
    let mut staged = Vec::with_capacity(plan.entries.len());
    for (index, entry) in plan.entries.iter().enumerate() {
        let tmp = entry
            .from
            .with_file_name(format!(".rename-staged-{}", index));
        fs::rename(&entry.from, &tmp).map_err(|source| RenameError::Rename {
            from: entry.from.clone(),
            to: tmp.clone(),
            source,
        })?;
        staged.push(tmp);
    }

    for (entry, tmp) in plan.entries.iter().zip(&staged) {
        fs::rename(tmp, &entry.to).map_err(|source| RenameError::Rename {
            from: tmp.clone(),
            to: entry.to.clone(),
            source,
        })?;
        info!("Renamed {} -> {}", entry.from.display(), entry.to.display());
    }

    Ok(plan.entries.len())
}

/// Plan and apply in one step
pub fn rename_images(dir: &Path) -> Result<usize, RenameError> {
    let plan = plan_renames(dir)?;
    apply_renames(&plan)
}

/// Discover image files directly in `dir`, sorted lexicographically by
/// file name
fn discover_images(dir: &Path) -> Result<Vec<PathBuf>, RenameError> {
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    let mut files = Vec::new();
    for ext in IMAGE_EXTENSIONS {
        let pattern = format!("{}/*.{}", dir.display(), ext);
        let entries = glob::glob_with(&pattern, options)
            .map_err(|e| RenameError::Pattern(format!("{}: {}", pattern, e)))?;
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => {
                    warn!("Error accessing path: {}", e);
                }
            }
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn pad_width(count: usize) -> usize {
    count.to_string().len().max(3)
}
