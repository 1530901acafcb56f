//! Loading product lists from JSON, YAML or TOML documents.

use crate::core::Product;
use crate::errors::{PriceFilterError, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputFormat {
    /// Choose by file extension, falling back to JSON
    #[default]
    Auto,
    Json,
    Yaml,
    Toml,
}

impl InputFormat {
    /// Resolve `Auto` against a path's extension.
    pub fn resolve(self, path: &Path) -> InputFormat {
        if self != InputFormat::Auto {
            return self;
        }
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            Some("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InputFormat::Auto => "auto",
            InputFormat::Json => "json",
            InputFormat::Yaml => "yaml",
            InputFormat::Toml => "toml",
        }
    }
}

/// The `{"products": [...]}` document shape.
#[derive(Deserialize)]
struct WrappedDocument {
    products: Vec<Product>,
}

const SHAPE_MESSAGE: &str = "expected a list of products or a table with a `products` list";

// Shape is checked on a generic value first; records are then decoded with
// the concrete type so field names and positions survive in the error.
fn decode_json(contents: &str) -> std::result::Result<Vec<Product>, String> {
    let value: serde_json::Value = serde_json::from_str(contents).map_err(|e| e.to_string())?;
    if value.is_array() {
        serde_json::from_str::<Vec<Product>>(contents).map_err(|e| e.to_string())
    } else if value.is_object() {
        serde_json::from_str::<WrappedDocument>(contents)
            .map(|doc| doc.products)
            .map_err(|e| e.to_string())
    } else {
        Err(SHAPE_MESSAGE.to_string())
    }
}

fn decode_yaml(contents: &str) -> std::result::Result<Vec<Product>, String> {
    let value: serde_yaml::Value = serde_yaml::from_str(contents).map_err(|e| e.to_string())?;
    if value.is_sequence() {
        serde_yaml::from_str::<Vec<Product>>(contents).map_err(|e| e.to_string())
    } else if value.is_mapping() {
        serde_yaml::from_str::<WrappedDocument>(contents)
            .map(|doc| doc.products)
            .map_err(|e| e.to_string())
    } else {
        Err(SHAPE_MESSAGE.to_string())
    }
}

// Only a document with no tables or keys at all counts as an empty list.
fn decode_toml(contents: &str) -> std::result::Result<Vec<Product>, String> {
    let table: toml::Table = toml::from_str(contents).map_err(|e| e.to_string())?;
    if table.is_empty() {
        return Ok(Vec::new());
    }
    toml::from_str::<WrappedDocument>(contents)
        .map(|doc| doc.products)
        .map_err(|e| e.to_string())
}

/// Pure function to decode products from document text.
pub fn parse_products(contents: &str, format: InputFormat) -> Result<Vec<Product>> {
    let format = match format {
        InputFormat::Auto => InputFormat::Json,
        other => other,
    };

    let decoded = match format {
        InputFormat::Json | InputFormat::Auto => decode_json(contents),
        InputFormat::Yaml => decode_yaml(contents),
        InputFormat::Toml => decode_toml(contents),
    };

    decoded.map_err(|message| PriceFilterError::malformed_input(format.name(), message, None))
}

/// Read products from `path`, or from stdin when `path` is `-`.
pub fn load_products(path: &Path, format: InputFormat) -> Result<Vec<Product>> {
    let format = format.resolve(path);
    let contents = read_source(path)?;

    let products = parse_products(&contents, format).map_err(|err| match err {
        PriceFilterError::MalformedInput {
            format, message, ..
        } => PriceFilterError::malformed_input(format, message, Some(path.to_path_buf())),
        other => other,
    })?;

    log::debug!(
        "Loaded {} products from {} as {}",
        products.len(),
        path.display(),
        format.name()
    );
    Ok(products)
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .map_err(|e| PriceFilterError::from_io_error(e, None))?;
        return Ok(contents);
    }

    std::fs::read_to_string(path)
        .map_err(|e| PriceFilterError::from_io_error(e, Some(PathBuf::from(path))))
}
