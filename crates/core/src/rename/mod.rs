//! Sequential image renaming
//!
//! Renames the image files in a directory to a zero-padded sequential
//! pattern, preserving each file's original extension. Discovery is
//! case-insensitive on extension; ordering is lexicographic by file
//! name so reruns are deterministic.

pub mod error;
pub mod renamer;

pub use error::RenameError;
pub use renamer::{
    IMAGE_EXTENSIONS, RenameEntry, RenamePlan, apply_renames, plan_renames, rename_images,
};
