use anyhow::Result;
use clap::Parser;
use pricefilter::cli::{Cli, Commands};
use pricefilter::commands::{filter::FilterConfig, verify::VerifyConfig};
use pricefilter::observability::{init_logging, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Filter {
            input,
            input_format,
            format,
            output,
            strategy,
            config,
            plain,
            verbosity: _,
        } => pricefilter::commands::filter::handle_filter(FilterConfig {
            input,
            input_format,
            format,
            output,
            strategy,
            config,
            plain,
        }),
        Commands::Verify {
            input,
            input_format,
            verbosity: _,
        } => pricefilter::commands::verify::handle_verify(VerifyConfig {
            input,
            input_format,
        }),
        Commands::Init { force } => pricefilter::commands::init::init_config(force),
    }
}
