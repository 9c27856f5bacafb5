//! Product generation and file output

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::info;
use uuid::Uuid;

use crate::models::Product;

use super::config::CatalogConfig;
use super::error::CatalogError;

/// Image URLs products are assigned from
pub const IMAGE_URLS: [&str; 7] = [
    "https://i.ibb.co/h1HbX2tM/image0.png",
    "https://i.ibb.co/DfM3DR0t/image1.png",
    "https://i.ibb.co/PZ04QGhH/image2.png",
    "https://i.ibb.co/3YNTdLJ4/image3.png",
    "https://i.ibb.co/nqP2vP85/image4.png",
    "https://i.ibb.co/Kp6PGKsZ/image5.png",
    "https://i.ibb.co/JRSNKTHN/image6.png",
];

/// Categories products are assigned from
pub const CATEGORIES: [&str; 7] = [
    "Electronics",
    "Books",
    "Clothing",
    "Toys",
    "Home",
    "Sports",
    "Outdoors",
];

/// Catalog generator producing randomized product files
pub struct CatalogGenerator {
    config: CatalogConfig,
}

impl CatalogGenerator {
    /// Create a generator with the given configuration
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Generate one product
    ///
    /// `file_index` and `product_index` are 1-based and stamped into the
    /// name and description so every record is traceable to its file.
    pub fn generate_product<R: Rng>(
        &self,
        file_index: usize,
        product_index: usize,
        rng: &mut R,
    ) -> Product {
        Product {
            id: Uuid::new_v4().to_string(),
            name: format!("Product {}-{}", file_index, product_index),
            description: format!(
                "This is the description for product {}-{}.",
                file_index, product_index
            ),
            image_url: IMAGE_URLS
                .choose(rng)
                .copied()
                .unwrap_or(IMAGE_URLS[0])
                .to_string(),
            category: CATEGORIES
                .choose(rng)
                .copied()
                .unwrap_or(CATEGORIES[0])
                .to_string(),
            view_count: rng.random_range(0..=1000),
        }
    }

    /// Generate the products for one file
    pub fn generate_file<R: Rng>(&self, file_index: usize, rng: &mut R) -> Vec<Product> {
        (1..=self.config.products_per_file)
            .map(|product_index| self.generate_product(file_index, product_index, rng))
            .collect()
    }

    /// Write the whole catalog into `dir`, returning the written paths
    ///
    /// File names follow `products_{file_index}_{products_per_file}.json`
    /// with a 1-based file index.
    pub fn write_catalog(&self, dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
        let mut rng = rand::rng();
        let mut written = Vec::with_capacity(self.config.file_count);

        for file_index in 1..=self.config.file_count {
            let products = self.generate_file(file_index, &mut rng);
            let file_name = format!(
                "products_{}_{}.json",
                file_index, self.config.products_per_file
            );
            let path = dir.join(file_name);
            write_products(&path, &products)?;
            info!("Created {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

fn write_products(path: &Path, products: &[Product]) -> Result<(), CatalogError> {
    let mut json = serde_json::to_string_pretty(products)
        .map_err(|e| CatalogError::Serialization(e.to_string()))?;
    json.push('\n');
    fs::write(path, json).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_product_fields_come_from_fixed_pools() {
        let generator = CatalogGenerator::new(CatalogConfig::default());
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let product = generator.generate_product(2, 5, &mut rng);
            assert_eq!(product.name, "Product 2-5");
            assert_eq!(
                product.description,
                "This is the description for product 2-5."
            );
            assert!(IMAGE_URLS.contains(&product.image_url.as_str()));
            assert!(CATEGORIES.contains(&product.category.as_str()));
            assert!(product.view_count <= 1000);
        }
    }

    #[test]
    fn test_generate_file_count_and_indices() {
        let config = CatalogConfig::builder().products_per_file(4).build();
        let generator = CatalogGenerator::new(config);
        let mut rng = StdRng::seed_from_u64(7);

        let products = generator.generate_file(3, &mut rng);
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].name, "Product 3-1");
        assert_eq!(products[3].name, "Product 3-4");
    }

    #[test]
    fn test_product_ids_are_unique() {
        let generator = CatalogGenerator::new(CatalogConfig::default());
        let mut rng = StdRng::seed_from_u64(7);

        let products = generator.generate_file(1, &mut rng);
        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }
}
