pub mod input;
pub mod output;

pub use input::{load_products, parse_products, InputFormat};
pub use output::{create_writer, FilterReport, OutputFormat, OutputWriter};

use anyhow::{Context, Result};
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
