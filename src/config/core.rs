use crate::io::OutputFormat;
use crate::pricing::Strategy;
use serde::{Deserialize, Serialize};

/// Root configuration structure for pricefilter
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PriceFilterConfig {
    /// Filter behaviour
    #[serde(default)]
    pub filter: Option<FilterConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilterConfig {
    /// Which form of the filter to run
    #[serde(default)]
    pub strategy: Option<Strategy>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl PriceFilterConfig {
    pub fn strategy(&self) -> Strategy {
        self.filter
            .as_ref()
            .and_then(|f| f.strategy)
            .unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format)
            .unwrap_or_default()
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }
}
