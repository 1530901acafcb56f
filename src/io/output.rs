use crate::core::ChargeMap;
use crate::pricing::THRESHOLD;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Yaml,
}

/// A filter result together with the input size it was computed from.
#[derive(Debug, Clone)]
pub struct FilterReport {
    pub charges: ChargeMap,
    pub products_considered: usize,
}

impl FilterReport {
    pub fn new(charges: ChargeMap, products_considered: usize) -> Self {
        Self {
            charges,
            products_considered,
        }
    }

    /// Entries sorted by id for stable presentation.
    pub fn sorted_entries(&self) -> BTreeMap<&str, f64> {
        self.charges
            .iter()
            .map(|(id, total)| (id.as_str(), *total))
            .collect()
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &FilterReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &FilterReport) -> anyhow::Result<()> {
        let entries: BTreeMap<&str, JsonCharge> = report
            .sorted_entries()
            .into_iter()
            .map(|(id, total)| (id, JsonCharge(total)))
            .collect();
        let json = serde_json::to_string_pretty(&entries)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

/// JSON has no literal for non-finite numbers; they are written as
/// `"inf"`, `"-inf"` or `"NaN"` instead of serde_json's `null`.
struct JsonCharge(f64);

impl Serialize for JsonCharge {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_str(&format_charge(self.0))
        }
    }
}

pub struct YamlWriter<W: Write> {
    writer: W,
}

impl<W: Write> YamlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for YamlWriter<W> {
    fn write_report(&mut self, report: &FilterReport) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(&report.sorted_entries())?;
        self.writer.write_all(yaml.as_bytes())?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &FilterReport) -> anyhow::Result<()> {
        let entries = report.sorted_entries();

        if entries.is_empty() {
            writeln!(
                self.writer,
                "{}",
                format!("No products over threshold ({THRESHOLD})").dimmed()
            )?;
        } else {
            writeln!(self.writer, "{}", build_table(&entries))?;
        }

        writeln!(
            self.writer,
            "{} of {} products over threshold",
            entries.len().to_string().bold(),
            report.products_considered
        )?;
        Ok(())
    }
}

fn build_table(entries: &BTreeMap<&str, f64>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Product"), Cell::new("Total charge")]);

    for (id, total) in entries {
        table.add_row(vec![
            Cell::new(id),
            Cell::new(format_charge(*total)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

// Shortest exact form, so totals just above the threshold never print as 10.
fn format_charge(total: f64) -> String {
    if total.is_finite() {
        format!("{total:?}")
    } else {
        total.to_string()
    }
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Yaml => Box::new(YamlWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
