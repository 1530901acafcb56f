use super::{compute_over_threshold, compute_over_threshold_imperative};
use crate::core::{ChargeMap, Product};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which form of the threshold filter to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Filter/project iterator pipeline (default)
    #[default]
    Pipeline,
    /// Explicit loop with inserts
    Loop,
}

impl Strategy {
    pub fn apply(self, products: &[Product]) -> ChargeMap {
        match self {
            Strategy::Pipeline => compute_over_threshold(products),
            Strategy::Loop => compute_over_threshold_imperative(products),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Pipeline => "pipeline",
            Strategy::Loop => "loop",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pipeline() {
        assert_eq!(Strategy::default(), Strategy::Pipeline);
    }

    #[test]
    fn both_strategies_dispatch_to_same_result() {
        let products = vec![Product::new("a", 11.0, 0.0), Product::new("b", 1.0, 1.0)];
        assert_eq!(
            Strategy::Pipeline.apply(&products),
            Strategy::Loop.apply(&products)
        );
    }

    #[test]
    fn deserializes_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: Strategy,
        }
        let parsed: Wrapper = toml::from_str("strategy = \"loop\"").unwrap();
        assert_eq!(parsed.strategy, Strategy::Loop);
    }
}
