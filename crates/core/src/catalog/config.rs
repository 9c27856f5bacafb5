//! Configuration for catalog generation

use serde::{Deserialize, Serialize};

/// Configuration for synthetic catalog generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Number of JSON files to produce
    pub file_count: usize,

    /// Number of products per file
    pub products_per_file: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file_count: 10,
            products_per_file: 10,
        }
    }
}

impl CatalogConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::default()
    }
}

/// Builder for CatalogConfig
#[derive(Debug, Default)]
pub struct CatalogConfigBuilder {
    config: CatalogConfig,
}

impl CatalogConfigBuilder {
    /// Set the number of files to produce
    pub fn file_count(mut self, count: usize) -> Self {
        self.config.file_count = count;
        self
    }

    /// Set the number of products per file
    pub fn products_per_file(mut self, count: usize) -> Self {
        self.config.products_per_file = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CatalogConfig {
        self.config
    }
}
