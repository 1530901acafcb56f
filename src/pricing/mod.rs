//! Threshold filtering over product lists.
//!
//! Both forms below compute the same mapping: every product whose total
//! charge is strictly greater than [`THRESHOLD`] contributes `id -> total`.
//! When ids repeat, the last qualifying product in input order wins.
//!
//! ```rust
//! use pricefilter::core::Product;
//! use pricefilter::pricing::compute_over_threshold;
//!
//! let products = vec![
//!     Product::new("p1", 5.0, 2.0),
//!     Product::new("p2", 8.0, 5.0),
//!     Product::new("p3", 1.0, 1.0),
//! ];
//!
//! let charges = compute_over_threshold(&products);
//! assert_eq!(charges.len(), 1);
//! assert_eq!(charges["p2"], 13.0);
//! ```

pub mod strategy;

pub use strategy::Strategy;

use crate::core::{ChargeMap, Product};

/// Exclusive lower bound a total charge must exceed to be reported.
pub const THRESHOLD: f64 = 10.0;

/// Pure predicate: does a total charge exceed the threshold?
///
/// `NaN` never qualifies because every comparison with it is false.
#[inline]
pub fn qualifies(total: f64) -> bool {
    total > THRESHOLD
}

/// Filter/project pipeline form.
pub fn compute_over_threshold(products: &[Product]) -> ChargeMap {
    products
        .iter()
        .map(|product| (product, product.total_charge()))
        .filter(|(_, total)| qualifies(*total))
        .map(|(product, total)| (product.id.clone(), total))
        .collect()
}

/// Explicit-loop form.
pub fn compute_over_threshold_imperative(products: &[Product]) -> ChargeMap {
    let mut results = ChargeMap::new();
    for product in products {
        let total = product.total_charge();
        if qualifies(total) {
            results.insert(product.id.clone(), total);
        }
    }
    results
}

/// Ids whose presence or total differs between two charge maps, sorted.
pub fn mismatched_ids(left: &ChargeMap, right: &ChargeMap) -> Vec<String> {
    let mut ids: Vec<String> = left
        .keys()
        .chain(right.keys())
        .filter(|id| left.get(*id) != right.get(*id))
        .cloned()
        .collect();
    ids.sort();
    ids.dedup();
    ids
}
