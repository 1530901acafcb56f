use crate::core::{ChargeMap, Product};
use crate::errors::PriceFilterError;
use crate::io::{self, InputFormat};
use crate::observability::{set_current_input, set_phase, RunPhase};
use crate::pricing::{compute_over_threshold, compute_over_threshold_imperative, mismatched_ids};
use anyhow::Result;
use std::path::PathBuf;
use tracing::info_span;

pub struct VerifyConfig {
    pub input: PathBuf,
    pub input_format: InputFormat,
}

/// Outcome of comparing the two filter forms.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyOutcome {
    pub products: usize,
    pub selected: usize,
    /// Ids whose presence or value differs between the forms, sorted.
    pub mismatched_ids: Vec<String>,
}

impl VerifyOutcome {
    pub fn from_maps(products: usize, pipeline: &ChargeMap, imperative: &ChargeMap) -> Self {
        Self {
            products,
            selected: pipeline.len(),
            mismatched_ids: mismatched_ids(pipeline, imperative),
        }
    }

    pub fn agrees(&self) -> bool {
        self.mismatched_ids.is_empty()
    }

    /// Turn a disagreement into an E050 validation error.
    pub fn check(&self) -> std::result::Result<(), PriceFilterError> {
        if self.agrees() {
            return Ok(());
        }
        Err(PriceFilterError::validation(format!(
            "pipeline and loop forms disagree on ids: {}",
            self.mismatched_ids.join(", ")
        )))
    }
}

// Pure function to compare both forms on the same input
pub fn compare_forms(products: &[Product]) -> VerifyOutcome {
    VerifyOutcome::from_maps(
        products.len(),
        &compute_over_threshold(products),
        &compute_over_threshold_imperative(products),
    )
}

pub fn handle_verify(config: VerifyConfig) -> Result<()> {
    let _span = info_span!("verify", input = %config.input.display()).entered();
    let _input = set_current_input(&config.input);

    let products = {
        let _phase = set_phase(RunPhase::Loading);
        io::load_products(&config.input, config.input_format)?
    };

    let outcome = {
        let _phase = set_phase(RunPhase::Filtering);
        compare_forms(&products)
    };
    outcome.check()?;

    println!(
        "Forms agree: {} of {} products over threshold",
        outcome.selected, outcome.products
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn charges(entries: &[(&str, f64)]) -> ChargeMap {
        entries
            .iter()
            .map(|(id, total)| (id.to_string(), *total))
            .collect()
    }

    #[test]
    fn forms_agree_on_duplicate_ids() {
        let products = vec![Product::new("A", 6.0, 6.0), Product::new("A", 20.0, 0.0)];
        let outcome = compare_forms(&products);
        assert!(outcome.agrees());
        assert!(outcome.check().is_ok());
        assert_eq!(outcome.products, 2);
        assert_eq!(outcome.selected, 1);
    }

    #[test]
    fn empty_input_agrees() {
        let outcome = compare_forms(&[]);
        assert!(outcome.agrees());
        assert_eq!(outcome.selected, 0);
    }

    #[test]
    fn disagreeing_maps_list_sorted_unique_ids() {
        let pipeline = charges(&[("zeta", 11.0), ("beta", 12.0), ("same", 15.0)]);
        let imperative = charges(&[("beta", 30.0), ("alpha", 20.0), ("same", 15.0)]);

        let outcome = VerifyOutcome::from_maps(4, &pipeline, &imperative);
        assert!(!outcome.agrees());
        assert_eq!(outcome.selected, 3);
        assert_eq!(outcome.mismatched_ids, vec!["alpha", "beta", "zeta"]);
    }

    #[test]
    fn disagreement_is_an_e050_error() {
        let pipeline = charges(&[("a", 11.0)]);
        let imperative = charges(&[("a", 12.0), ("b", 13.0)]);

        let err = VerifyOutcome::from_maps(2, &pipeline, &imperative)
            .check()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_GENERIC);
        assert_eq!(
            err.to_string(),
            "[E050] Validation error: pipeline and loop forms disagree on ids: a, b"
        );
    }

    #[test]
    fn handle_verify_succeeds_on_valid_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("products.yaml");
        std::fs::write(&input, "- id: p1\n  basePrice: 12\n  tax: 1\n").unwrap();

        handle_verify(VerifyConfig {
            input,
            input_format: InputFormat::Auto,
        })
        .unwrap();
    }
}
