//! Dataset loading
//!
//! Loads whole JSON arrays from disk. Property records are normalized at
//! ingestion: keys are trimmed before any lookup happens, so the stray
//! leading whitespace in the source data never leaks past this module.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::models::{ElementRecord, PropertyRecord};

use super::error::DatasetError;

/// Load the primary element dataset
pub fn load_elements(path: &Path) -> Result<Vec<ElementRecord>, DatasetError> {
    let content = read_input(path)?;
    let elements: Vec<ElementRecord> =
        serde_json::from_str(&content).map_err(|source| DatasetError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded {} elements from {}", elements.len(), path.display());
    Ok(elements)
}

/// Load the secondary property dataset
pub fn load_properties(path: &Path) -> Result<Vec<PropertyRecord>, DatasetError> {
    let content = read_input(path)?;
    let raw: Vec<Value> = serde_json::from_str(&content).map_err(|source| DatasetError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let mut properties = Vec::with_capacity(raw.len());
    for (index, value) in raw.iter().enumerate() {
        let record =
            PropertyRecord::from_object(value).map_err(|e| DatasetError::InvalidRecord {
                path: path.to_path_buf(),
                index,
                reason: e.to_string(),
            })?;
        properties.push(record);
    }

    info!(
        "Loaded {} property records from {}",
        properties.len(),
        path.display()
    );
    Ok(properties)
}

fn read_input(path: &Path) -> Result<String, DatasetError> {
    if !path.is_file() {
        return Err(DatasetError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
