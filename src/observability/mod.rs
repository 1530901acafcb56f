//! Logging setup and crash-report context.
//!
//! ```ignore
//! use pricefilter::observability::{init_logging, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_logging(1);
//! }
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    get_current_context, set_current_input, set_phase, ContextGuard, RunContext, RunPhase,
};
pub use panic_hook::install_panic_hook;

use tracing_subscriber::EnvFilter;

/// Map `-v` repetitions to a default filter directive.
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag. `log` records
/// are forwarded into the same subscriber. Calling this twice is harmless.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels_map_to_directives() {
        assert_eq!(verbosity_directive(0), "warn");
        assert_eq!(verbosity_directive(1), "info");
        assert_eq!(verbosity_directive(2), "debug");
        assert_eq!(verbosity_directive(7), "trace");
    }

    #[test]
    fn init_logging_can_be_called_twice() {
        init_logging(0);
        init_logging(2);
    }
}
