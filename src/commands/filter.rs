use crate::config::{self, PriceFilterConfig};
use crate::core::Product;
use crate::io::{self, FilterReport, InputFormat, OutputFormat};
use crate::observability::{set_current_input, set_phase, RunPhase};
use crate::pricing::Strategy;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info, info_span};

pub struct FilterConfig {
    pub input: PathBuf,
    pub input_format: InputFormat,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub strategy: Option<Strategy>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

/// Settings after merging CLI flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub strategy: Strategy,
    pub format: OutputFormat,
    pub color: bool,
}

// Pure function: CLI flags override config, config overrides defaults
pub fn resolve_settings(cli: &FilterConfig, file: &PriceFilterConfig) -> ResolvedSettings {
    ResolvedSettings {
        strategy: cli.strategy.unwrap_or_else(|| file.strategy()),
        format: cli.format.unwrap_or_else(|| file.output_format()),
        color: !cli.plain && file.use_color().unwrap_or(true),
    }
}

pub fn handle_filter(config: FilterConfig) -> Result<()> {
    let _span = info_span!("filter", input = %config.input.display()).entered();
    let _input = set_current_input(&config.input);

    let file_config = match &config.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };
    let settings = resolve_settings(&config, &file_config);
    debug!(?settings, "Resolved filter settings");

    if !settings.color {
        colored::control::set_override(false);
    }

    let products = {
        let _phase = set_phase(RunPhase::Loading);
        io::load_products(&config.input, config.input_format)?
    };

    let report = run_filter(&products, settings.strategy);
    info!(
        strategy = %settings.strategy,
        considered = report.products_considered,
        selected = report.charges.len(),
        "Filtered products"
    );

    let _phase = set_phase(RunPhase::Writing);
    write_report(&report, settings.format, config.output.as_ref())
}

pub fn run_filter(products: &[Product], strategy: Strategy) -> FilterReport {
    let _phase = set_phase(RunPhase::Filtering);
    FilterReport::new(strategy.apply(products), products.len())
}

fn write_report(
    report: &FilterReport,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<()> {
    let sink: Box<dyn std::io::Write> = match output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    io::create_writer(format, sink).write_report(report)
}
