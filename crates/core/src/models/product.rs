//! Catalog product records

use serde::{Deserialize, Serialize};

/// Synthetic catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUIDv4, stored as text)
    pub id: String,
    pub name: String,
    pub description: String,
    /// Chosen from a fixed pool of hosted images
    pub image_url: String,
    /// Chosen from a fixed pool of categories
    pub category: String,
    /// Integer in `[0, 1000]`
    pub view_count: u32,
}
