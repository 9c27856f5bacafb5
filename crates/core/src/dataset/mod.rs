//! Dataset file I/O
//!
//! Whole-file JSON loading and saving for the dataset utilities. Inputs
//! are read wholesale into memory; outputs are written only after the
//! full value has been produced, so a failed run commits nothing.

pub mod error;
pub mod loader;
pub mod saver;

pub use error::DatasetError;
pub use loader::{load_elements, load_properties};
pub use saver::save_json_pretty;
