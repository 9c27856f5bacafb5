//! Catalog generation tests over real files

use std::collections::HashSet;
use std::fs;

use element_data_core::Product;
use element_data_core::catalog::{CATEGORIES, CatalogConfig, CatalogGenerator, IMAGE_URLS};
use tempfile::tempdir;

#[test]
fn test_writes_expected_files_and_counts() {
    let dir = tempdir().unwrap();
    let config = CatalogConfig::builder()
        .file_count(3)
        .products_per_file(4)
        .build();
    let generator = CatalogGenerator::new(config);

    let written = generator.write_catalog(dir.path()).unwrap();
    assert_eq!(written.len(), 3);
    assert!(written[0].ends_with("products_1_4.json"));
    assert!(written[2].ends_with("products_3_4.json"));

    let mut ids = HashSet::new();
    for (file_index, path) in written.iter().enumerate() {
        let content = fs::read_to_string(path).unwrap();
        let products: Vec<Product> = serde_json::from_str(&content).unwrap();
        assert_eq!(products.len(), 4);

        for (product_index, product) in products.iter().enumerate() {
            assert_eq!(
                product.name,
                format!("Product {}-{}", file_index + 1, product_index + 1)
            );
            assert!(IMAGE_URLS.contains(&product.image_url.as_str()));
            assert!(CATEGORIES.contains(&product.category.as_str()));
            assert!(product.view_count <= 1000);
            assert!(ids.insert(product.id.clone()), "duplicate product id");
        }
    }
}

#[test]
fn test_default_catalog_shape() {
    let dir = tempdir().unwrap();
    let generator = CatalogGenerator::new(CatalogConfig::default());

    let written = generator.write_catalog(dir.path()).unwrap();
    assert_eq!(written.len(), 10);

    let content = fs::read_to_string(&written[9]).unwrap();
    let products: Vec<Product> = serde_json::from_str(&content).unwrap();
    assert_eq!(products.len(), 10);
    assert!(written[9].ends_with("products_10_10.json"));
}
