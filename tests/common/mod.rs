// Test utility module for pricefilter integration tests
#![allow(dead_code)]

use pricefilter::Product;
use proptest::prelude::*;
use std::path::PathBuf;

// Helper to create temporary input files
pub fn create_test_file(content: &str, extension: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join(format!("products.{}", extension));
    std::fs::write(&file_path, content).expect("Failed to write test file");
    (temp_dir, file_path)
}

pub fn scenario_products() -> Vec<Product> {
    vec![
        Product::new("p1", 5.0, 2.0),
        Product::new("p2", 8.0, 5.0),
        Product::new("p3", 1.0, 1.0),
    ]
}

/// Prices clustered around the threshold, with occasional non-finite values.
pub fn price() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -20.0..30.0f64,
        2 => Just(5.0),
        2 => Just(10.0),
        1 => Just(0.0),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

/// Products drawn from a small id alphabet so duplicates are common.
pub fn product() -> impl Strategy<Value = Product> {
    ("[a-e]", price(), price()).prop_map(|(id, base_price, tax)| Product::new(id, base_price, tax))
}

pub fn products() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product(), 0..40)
}
