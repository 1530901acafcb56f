use crate::io::{InputFormat, OutputFormat};
use crate::pricing::Strategy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pricefilter")]
#[command(about = "Report products whose total charge exceeds the threshold", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter a product list and report total charges over the threshold
    Filter {
        /// Product file to read ("-" for stdin)
        input: PathBuf,

        /// Input document format
        #[arg(long = "input-format", value_enum, default_value = "auto")]
        input_format: InputFormat,

        /// Output format (defaults to the config value, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Filter form to run (defaults to the config value, then pipeline)
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,

        /// Configuration file (skips discovery of .pricefilter.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Disable colors in terminal output
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Check that the pipeline and loop forms agree on an input
    Verify {
        /// Product file to read ("-" for stdin)
        input: PathBuf,

        /// Input document format
        #[arg(long = "input-format", value_enum, default_value = "auto")]
        input_format: InputFormat,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Filter { verbosity, .. } | Commands::Verify { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_filter_with_flags() {
        let cli = Cli::try_parse_from([
            "pricefilter",
            "filter",
            "products.yaml",
            "--format",
            "json",
            "--strategy",
            "loop",
            "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Filter {
                input,
                format,
                strategy,
                verbosity,
                ..
            } => {
                assert_eq!(input, PathBuf::from("products.yaml"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(strategy, Some(Strategy::Loop));
                assert_eq!(verbosity, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn filter_defaults_leave_config_in_charge() {
        let cli = Cli::try_parse_from(["pricefilter", "filter", "-"]).unwrap();
        match cli.command {
            Commands::Filter {
                format,
                strategy,
                input_format,
                ..
            } => {
                assert_eq!(format, None);
                assert_eq!(strategy, None);
                assert_eq!(input_format, InputFormat::Auto);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["pricefilter", "filter", "a.json", "--strategy", "fast"]).is_err());
    }
}
